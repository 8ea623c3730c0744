//! Geometric primitives for gesture interpretation.
//!
//! Axis enums with the dominant-axis rule, quarter-turn rounding and
//! snapping, rigid poses, rays, and the drag helper plane.

/// Rigid rotation + translation transforms.
pub mod pose;
/// Ray casting against boxes.
pub mod ray;
/// The helper plane a drag is projected onto.
pub mod plane;

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use glam::{EulerRot, Mat3, Quat, Vec2, Vec3};

pub use plane::DragPlane;
pub use pose::Pose;
pub use ray::{Ray, RayHit};

use crate::error::TurnError;

/// One quarter turn in radians.
pub const QUARTER_TURN: f32 = FRAC_PI_2;

/// Half a quarter turn, the flick bias.
pub const EIGHTH_TURN: f32 = FRAC_PI_4;

/// A world/object axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// The x axis.
    X,
    /// The y axis.
    Y,
    /// The z axis.
    Z,
}

impl Axis {
    /// All axes in comparison order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Unit vector along the positive direction of this axis.
    #[must_use]
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// Component of `v` along this axis.
    #[must_use]
    pub fn component(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    /// Axis with the largest absolute component of `v`.
    ///
    /// Ties keep the axis compared first (x before y before z).
    #[must_use]
    pub fn dominant(v: Vec3) -> Axis {
        let mut best = Axis::X;
        for axis in [Axis::Y, Axis::Z] {
            if axis.component(v).abs() > best.component(v).abs() {
                best = axis;
            }
        }
        best
    }

    /// Parse an axis key (`"x"`, `"y"` or `"z"`, case-insensitive).
    ///
    /// # Errors
    ///
    /// [`TurnError::UnknownAxis`] for any other key.
    pub fn from_key(key: &str) -> Result<Axis, TurnError> {
        match key {
            "x" | "X" => Ok(Axis::X),
            "y" | "Y" => Ok(Axis::Y),
            "z" | "Z" => Ok(Axis::Z),
            other => Err(TurnError::UnknownAxis(other.to_owned())),
        }
    }
}

/// An in-plane axis of the drag helper's local 2D frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaneAxis {
    /// Local x (screen-right-ish).
    X,
    /// Local y (screen-up-ish).
    Y,
}

impl PlaneAxis {
    /// Component of `v` along this axis.
    #[must_use]
    pub fn component(self, v: Vec2) -> f32 {
        match self {
            PlaneAxis::X => v.x,
            PlaneAxis::Y => v.y,
        }
    }

    /// Unit vector in the plane's local 3D frame.
    #[must_use]
    pub fn unit3(self) -> Vec3 {
        match self {
            PlaneAxis::X => Vec3::X,
            PlaneAxis::Y => Vec3::Y,
        }
    }

    /// Axis with the larger absolute component of `v`; ties keep x.
    #[must_use]
    pub fn dominant(v: Vec2) -> PlaneAxis {
        if v.y.abs() > v.x.abs() {
            PlaneAxis::Y
        } else {
            PlaneAxis::X
        }
    }
}

/// Round `v` to the signed unit vector of its dominant axis.
///
/// A zero vector stays zero.
#[must_use]
pub fn snap_to_axis(v: Vec3) -> Vec3 {
    let axis = Axis::dominant(v);
    let c = axis.component(v);
    if c == 0.0 {
        return Vec3::ZERO;
    }
    axis.unit() * c.signum()
}

/// Sign that maps zero to zero (unlike [`f32::signum`]).
pub(crate) fn sign(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Nearest multiple of a quarter turn.
///
/// Exact ties round away from zero, i.e. toward the sign of `angle`.
#[must_use]
pub fn round_to_quarter_turn(angle: f32) -> f32 {
    sign(angle) * (angle.abs() / QUARTER_TURN).round() * QUARTER_TURN
}

/// Snap a near-axis-aligned rotation to the exact rotation it approximates.
///
/// Each matrix entry is rounded to -1, 0 or 1. If that does not yield a
/// proper rotation (the input was far from axis-aligned) the Euler angles
/// are rounded to quarter turns instead.
#[must_use]
pub fn snap_rotation(rotation: Quat) -> Quat {
    let m = Mat3::from_quat(rotation);
    let snapped = Mat3::from_cols(
        m.x_axis.round(),
        m.y_axis.round(),
        m.z_axis.round(),
    );
    let is_rotation = [snapped.x_axis, snapped.y_axis, snapped.z_axis]
        .iter()
        .all(|c| c.length_squared() == 1.0)
        && snapped.determinant() == 1.0;

    if is_rotation {
        Quat::from_mat3(&snapped).normalize()
    } else {
        let (x, y, z) = rotation.to_euler(EulerRot::XYZ);
        Quat::from_euler(
            EulerRot::XYZ,
            round_to_quarter_turn(x),
            round_to_quarter_turn(y),
            round_to_quarter_turn(z),
        )
    }
}
