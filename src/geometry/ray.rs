use glam::Vec3;

use super::{snap_to_axis, Axis, Pose};

/// A half-line used for picking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

/// Nearest intersection of a ray with a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance along the ray.
    pub t: f32,
    /// Hit point in the frame the query was made in.
    pub point: Vec3,
    /// Outward axis-aligned surface normal at the hit.
    pub normal: Vec3,
}

impl Ray {
    /// Build a ray; the direction is normalized.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at distance `t`.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// This ray expressed in the frame whose world pose is `pose`.
    #[must_use]
    pub fn to_local(&self, pose: &Pose) -> Ray {
        let inv = pose.inverse();
        Ray {
            origin: inv.transform_point(self.origin),
            direction: inv.transform_vector(self.direction),
        }
    }

    /// Slab test against an origin-centered box with the given half extents.
    ///
    /// Starting inside the box counts as a miss: the proxy is only meant to be
    /// picked from outside.
    #[must_use]
    pub fn intersect_box(&self, half_extents: Vec3) -> Option<RayHit> {
        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;
        let mut near_axis = Axis::X;

        for axis in Axis::ALL {
            let o = axis.component(self.origin);
            let d = axis.component(self.direction);
            let h = axis.component(half_extents);
            if d.abs() < f32::EPSILON {
                if o.abs() > h {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / d;
            let (t0, t1) = {
                let a = (-h - o) * inv;
                let b = (h - o) * inv;
                if a < b { (a, b) } else { (b, a) }
            };
            if t0 > t_near {
                t_near = t0;
                near_axis = axis;
            }
            t_far = t_far.min(t1);
            if t_near > t_far {
                return None;
            }
        }

        if t_near < 0.0 {
            return None;
        }
        let point = self.at(t_near);
        let normal =
            snap_to_axis(near_axis.unit() * near_axis.component(point));
        Some(RayHit {
            t: t_near,
            point,
            normal,
        })
    }
}
