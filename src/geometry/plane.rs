use std::f32::consts::FRAC_PI_4;

use glam::{Mat3, Quat, Vec2, Vec3};

use super::{PlaneAxis, Pose, Ray};

/// Invisible square a drag is projected onto.
///
/// The pointer ray is intersected with this plane on every sample, and the
/// hit is measured in the plane's own 2D frame (local x/y, normal along
/// local +Z). Only the front side is hittable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragPlane {
    /// World orientation; local +Z is the plane normal.
    pub rotation: Quat,
    /// World position of the plane's center.
    pub origin: Vec3,
    /// Half the side length of the hittable square.
    pub half_size: f32,
}

impl DragPlane {
    /// Half side length of every helper plane.
    pub const HALF_SIZE: f32 = 100.0;

    /// Diagonal plane through the origin used for whole-cube drags.
    #[must_use]
    pub fn whole_cube_default() -> Self {
        Self {
            rotation: Quat::from_rotation_y(FRAC_PI_4),
            origin: Vec3::ZERO,
            half_size: Self::HALF_SIZE,
        }
    }

    /// Plane facing `normal` (in the assembly frame), pushed `offset` out
    /// along it, then carried into world space by `assembly`.
    #[must_use]
    pub fn facing(normal: Vec3, offset: f32, assembly: &Pose) -> Self {
        let local = Pose::new(look_rotation(normal), normal * offset);
        let world = assembly.mul_pose(&local);
        Self {
            rotation: world.rotation,
            origin: world.translation,
            half_size: Self::HALF_SIZE,
        }
    }

    /// World-space plane normal.
    #[must_use]
    pub fn normal(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Front-side intersection of `ray` with the bounded plane.
    #[must_use]
    pub fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        let n = self.normal();
        let denom = n.dot(ray.direction);
        if denom > -f32::EPSILON {
            return None;
        }
        let t = n.dot(self.origin - ray.origin) / denom;
        if t < 0.0 {
            return None;
        }
        let point = ray.at(t);
        let local = self.world_to_local(point);
        (local.x.abs() <= self.half_size && local.y.abs() <= self.half_size)
            .then_some(point)
    }

    /// World point in the plane's 2D frame.
    #[must_use]
    pub fn world_to_local(&self, point: Vec3) -> Vec2 {
        (self.rotation.inverse() * (point - self.origin)).truncate()
    }

    /// World direction of one of the plane's in-plane axes.
    #[must_use]
    pub fn direction_to_world(&self, axis: PlaneAxis) -> Vec3 {
        self.rotation * axis.unit3()
    }
}

/// Rotation whose local +Z points along `forward`, keeping local +Y as close
/// to world +Y as possible.
///
/// When `forward` is parallel to +Y the forward vector is nudged along +Z
/// first, so a plane facing straight up has local y pointing toward -Z.
#[must_use]
pub fn look_rotation(forward: Vec3) -> Quat {
    let up = Vec3::Y;
    let mut z = forward.normalize_or(Vec3::Z);
    let mut x = up.cross(z);
    if x.length_squared() == 0.0 {
        z.z += 0.0001;
        z = z.normalize();
        x = up.cross(z);
    }
    let x = x.normalize();
    let y = z.cross(x);
    Quat::from_mat3(&Mat3::from_cols(x, y, z)).normalize()
}
