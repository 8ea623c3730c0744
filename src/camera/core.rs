use glam::{Mat4, Vec2, Vec3};

use crate::geometry::Ray;
use crate::options::CameraOptions;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

/// Size of the element pointer coordinates are measured in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Viewport of the given pixel size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width over height (1 for a degenerate viewport).
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    /// Element-local pixel position to normalized device coordinates
    /// (x right, y up, both in [-1, 1]).
    #[must_use]
    pub fn to_ndc(&self, pixel: Vec2) -> Vec2 {
        Vec2::new(
            pixel.x / self.width * 2.0 - 1.0,
            -(pixel.y / self.height * 2.0 - 1.0),
        )
    }

    /// Normalized device coordinates back to element-local pixels.
    #[must_use]
    pub fn from_ndc(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.width,
            (1.0 - ndc.y) * 0.5 * self.height,
        )
    }

    /// Whether `pixel` lies in the right half of the viewport.
    #[must_use]
    pub fn is_right_half(&self, pixel: Vec2) -> bool {
        pixel.x > self.width / 2.0
    }
}

impl Camera {
    /// Isometric camera at `(d, d, d)` looking at the origin, with `d`
    /// chosen so the configured stage fits the viewport.
    #[must_use]
    pub fn for_viewport(viewport: Viewport, options: &CameraOptions) -> Self {
        let aspect = viewport.aspect();
        let half_fov_tan = (options.fovy.to_radians() / 2.0).tan();
        let stage_aspect = options.stage_width / options.stage_height;
        let fit = if stage_aspect < aspect {
            (options.stage_height / 2.0) / half_fov_tan
        } else {
            (options.stage_width / aspect) / (2.0 * half_fov_tan)
        };
        let d = fit * 0.5;
        Self {
            eye: Vec3::splat(d),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection()
            * Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Just the projection matrix.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        // perspective_rh uses the [0,1] depth range
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// World-space ray from the eye through a point in normalized device
    /// coordinates.
    #[must_use]
    pub fn ray_through(&self, ndc: Vec2) -> Ray {
        let forward = (self.target - self.eye).normalize();
        let right = forward.cross(self.up).normalize();
        let up = right.cross(forward);
        let half_height = (self.fovy.to_radians() / 2.0).tan();
        let half_width = half_height * self.aspect;
        Ray::new(
            self.eye,
            forward + right * (ndc.x * half_width) + up * (ndc.y * half_height),
        )
    }

    /// Normalized device coordinates of a world point.
    #[must_use]
    pub fn project(&self, world: Vec3) -> Vec2 {
        self.build_matrix().project_point3(world).truncate()
    }
}
