use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::util::easing::EasingFunction;

/// How committed rotations are animated.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum FlipStyle {
    /// Short cubic ease-out.
    #[default]
    Snappy,
    /// Gentle sine ease-out.
    Smooth,
    /// Overshoots and springs back onto the quarter turn.
    Bouncy,
}

/// Easing curve and duration for one kind of rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationProfile {
    /// Curve the rotation follows.
    pub easing: EasingFunction,
    /// Time a full quarter turn takes.
    pub duration: Duration,
    /// Apply the leftover overshoot to the assembly once the layer lands.
    pub bounce: bool,
}

impl FlipStyle {
    /// Profile for a layer turn.
    #[must_use]
    pub fn layer_profile(self) -> RotationProfile {
        match self {
            Self::Snappy => RotationProfile {
                easing: EasingFunction::PowerOut(3),
                duration: Duration::from_millis(125),
                bounce: false,
            },
            Self::Smooth => RotationProfile {
                easing: EasingFunction::SineOut,
                duration: Duration::from_millis(200),
                bounce: false,
            },
            Self::Bouncy => RotationProfile {
                easing: EasingFunction::BackOut { overshoot: 1.5 },
                duration: Duration::from_millis(300),
                bounce: true,
            },
        }
    }

    /// Profile for a whole-cube rotation.
    #[must_use]
    pub fn whole_cube_profile(self) -> RotationProfile {
        match self {
            Self::Snappy => RotationProfile {
                easing: EasingFunction::PowerOut(4),
                duration: Duration::from_millis(100),
                bounce: false,
            },
            Self::Smooth => RotationProfile {
                easing: EasingFunction::SineOut,
                duration: Duration::from_millis(150),
                bounce: false,
            },
            Self::Bouncy => RotationProfile {
                easing: EasingFunction::BackOut { overshoot: 2.0 },
                duration: Duration::from_millis(350),
                bounce: false,
            },
        }
    }
}

/// Gesture tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Controls", inline)]
#[serde(default)]
pub struct ControlsOptions {
    /// Animation style for committed rotations.
    #[schemars(title = "Flip Style")]
    pub flip_style: FlipStyle,
    /// Plane-space distance a drag must travel before it rotates anything.
    #[schemars(title = "Drag Threshold", range(min = 0.0, max = 0.5), extend("step" = 0.01))]
    pub drag_threshold: f32,
    /// Momentum along the drag axis above which a release counts as a flick.
    #[schemars(title = "Flick Momentum", range(min = 0.0, max = 0.5), extend("step" = 0.01))]
    pub flick_momentum: f32,
    /// How far back the momentum average looks, in milliseconds.
    #[schemars(skip)]
    pub momentum_window_ms: u64,
}

impl Default for ControlsOptions {
    fn default() -> Self {
        Self {
            flip_style: FlipStyle::Snappy,
            drag_threshold: 0.05,
            flick_momentum: 0.05,
            momentum_window_ms: 500,
        }
    }
}

impl ControlsOptions {
    /// Momentum window as a duration.
    #[must_use]
    pub fn momentum_window(&self) -> Duration {
        Duration::from_millis(self.momentum_window_ms)
    }
}
