use glam::{Quat, Vec3};

use super::snap_rotation;

/// Rigid transform: rotation followed by translation.
///
/// Pieces and containers never scale, so a pose is all the scene graph
/// needs to carry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Rotation applied first.
    pub rotation: Quat,
    /// Translation applied after the rotation.
    pub translation: Vec3,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    /// The identity pose.
    pub const IDENTITY: Self = Self {
        rotation: Quat::IDENTITY,
        translation: Vec3::ZERO,
    };

    /// Pose with only a translation.
    #[must_use]
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Pose with only a rotation.
    #[must_use]
    pub fn from_rotation(rotation: Quat) -> Self {
        Self {
            rotation,
            ..Self::IDENTITY
        }
    }

    /// Pose from rotation and translation.
    #[must_use]
    pub fn new(rotation: Quat, translation: Vec3) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Compose: the result applies `local` first, then `self`.
    #[must_use]
    pub fn mul_pose(&self, local: &Pose) -> Pose {
        Pose {
            rotation: (self.rotation * local.rotation).normalize(),
            translation: self.translation + self.rotation * local.translation,
        }
    }

    /// Inverse transform.
    #[must_use]
    pub fn inverse(&self) -> Pose {
        let inv = self.rotation.inverse();
        Pose {
            rotation: inv,
            translation: -(inv * self.translation),
        }
    }

    /// Transform a point.
    #[must_use]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation * point + self.translation
    }

    /// Transform a direction (translation ignored).
    #[must_use]
    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        self.rotation * vector
    }

    /// Rotate about `axis` expressed in this pose's own frame.
    pub fn rotate_local(&mut self, axis: Vec3, angle: f32) {
        self.rotation =
            (self.rotation * Quat::from_axis_angle(axis, angle)).normalize();
    }

    /// Rotate about `axis` expressed in the parent frame, keeping the
    /// translation in place.
    pub fn rotate_parent(&mut self, axis: Vec3, angle: f32) {
        self.rotation =
            (Quat::from_axis_angle(axis, angle) * self.rotation).normalize();
    }

    /// Snap the rotation to an exact quarter-turn orientation and the
    /// translation to the nearest multiple of `grid`.
    pub fn snap(&mut self, grid: f32) {
        self.rotation = snap_rotation(self.rotation);
        if grid > 0.0 {
            self.translation = (self.translation / grid).round() * grid;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn compose_then_invert_is_identity() {
        let a = Pose::new(
            Quat::from_axis_angle(Vec3::Y, 0.7),
            Vec3::new(1.0, 2.0, 3.0),
        );
        let b = Pose::new(Quat::from_axis_angle(Vec3::X, -0.3), Vec3::Z);
        let p = Vec3::new(0.3, -0.2, 0.9);
        let ab = a.mul_pose(&b);
        assert!(approx(ab.transform_point(p), a.transform_point(b.transform_point(p))));
        assert!(approx(ab.inverse().transform_point(ab.transform_point(p)), p));
    }

    #[test]
    fn local_and_parent_rotation_differ() {
        let base = Pose::from_rotation(Quat::from_axis_angle(Vec3::X, FRAC_PI_2));
        let mut local = base;
        local.rotate_local(Vec3::Y, FRAC_PI_2);
        let mut parent = base;
        parent.rotate_parent(Vec3::Y, FRAC_PI_2);
        assert!(!approx(local.transform_vector(Vec3::Z), parent.transform_vector(Vec3::Z)));
        // Local Y of `base` is world Z.
        assert!(approx(local.transform_vector(Vec3::Y), Vec3::Z));
    }

    #[test]
    fn snap_rounds_translation_to_grid() {
        let mut pose = Pose::new(
            Quat::from_axis_angle(Vec3::Z, FRAC_PI_2 + 0.002),
            Vec3::new(0.334, -0.0001, 0.1668),
        );
        pose.snap(1.0 / 6.0);
        assert!(approx(pose.translation, Vec3::new(2.0 / 6.0, 0.0, 1.0 / 6.0)));
        assert!(approx(pose.transform_vector(Vec3::X), Vec3::Y));
    }
}
