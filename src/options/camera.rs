use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and placement parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 5.0, max = 60.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Width of the stage the camera frames, in world units.
    #[schemars(title = "Stage Width", range(min = 1.0, max = 10.0), extend("step" = 0.1))]
    pub stage_width: f32,
    /// Height of the stage the camera frames, in world units.
    #[schemars(title = "Stage Height", range(min = 1.0, max = 10.0), extend("step" = 0.1))]
    pub stage_height: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 10.0,
            znear: 0.1,
            zfar: 1000.0,
            stage_width: 2.0,
            stage_height: 3.0,
        }
    }
}
