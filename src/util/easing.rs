//! Easing functions for rotation playback.
//!
//! Maps linear tween progress to an eased value. Input is always clamped to
//! [0.0, 1.0]; output starts at 0.0 and ends at 1.0 but is free to leave that
//! range in between (the `Back` and `Elastic` families overshoot).

use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Default overshoot for [`EasingFunction::BackIn`] / [`EasingFunction::BackOut`].
pub const DEFAULT_BACK_OVERSHOOT: f32 = 1.701_58;

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// `t^power` (slow start).
    PowerIn(i32),
    /// `1 - (1-t)^power` (fast start, slow end).
    PowerOut(i32),
    /// Power ease-in for the first half, ease-out for the second.
    PowerInOut(i32),
    /// `1 - cos(πt/2)`.
    SineIn,
    /// `sin(πt/2)`.
    SineOut,
    /// `(1 - cos(πt)) / 2`.
    SineInOut,
    /// Pulls back below zero before accelerating to the end.
    BackIn {
        /// Strength of the pull-back.
        overshoot: f32,
    },
    /// Shoots past the end and settles back onto it.
    BackOut {
        /// Strength of the overshoot.
        overshoot: f32,
    },
    /// Decaying oscillation around the end value.
    ElasticOut {
        /// Oscillation amplitude (values <= 0 fall back to 1).
        amplitude: f32,
        /// Oscillation period in progress units (values <= 0 fall back to 0.3).
        period: f32,
    },
}

impl EasingFunction {
    /// Default easing function: cubic power ease-out.
    pub const DEFAULT: EasingFunction = EasingFunction::PowerOut(3);

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match *self {
            EasingFunction::Linear => t,
            EasingFunction::PowerIn(power) => t.powi(power),
            EasingFunction::PowerOut(power) => 1.0 - (1.0 - t).powi(power),
            EasingFunction::PowerInOut(power) => {
                let t = t * 2.0;
                if t < 1.0 {
                    0.5 * t.powi(power)
                } else {
                    1.0 - 0.5 * (2.0 - t).powi(power)
                }
            }
            EasingFunction::SineIn => 1.0 - (FRAC_PI_2 * t).cos(),
            EasingFunction::SineOut => (FRAC_PI_2 * t).sin(),
            EasingFunction::SineInOut => 0.5 * (1.0 - (PI * t).cos()),
            EasingFunction::BackIn { overshoot: s } => {
                t * t * ((s + 1.0) * t - s)
            }
            EasingFunction::BackOut { overshoot: s } => {
                let t = t - 1.0;
                t * t * ((s + 1.0) * t + s) + 1.0
            }
            EasingFunction::ElasticOut { amplitude, period } => {
                elastic_out(t, amplitude, period)
            }
        }
    }
}

fn elastic_out(t: f32, amplitude: f32, period: f32) -> f32 {
    if t == 0.0 || t == 1.0 {
        return t;
    }
    let a = if amplitude > 0.0 { amplitude } else { 1.0 };
    let p = if period > 0.0 { period } else { 0.3 };
    // asin is undefined for a < 1; the phase shift collapses to zero there.
    let s = if a >= 1.0 { (1.0 / a).asin() * (p / TAU) } else { 0.0 };
    a * 2.0_f32.powf(-10.0 * t) * ((t - s) * (TAU / p)).sin() + 1.0
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}
