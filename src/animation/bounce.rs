//! Overshoot correction for bouncy layer turns.

/// Tracks the part of an overshooting layer turn that goes past its target.
///
/// Once the eased value reaches 1 the layer has landed; everything beyond
/// that is applied to the whole assembly instead, so the entire puzzle
/// wobbles and springs back. The first step past 1 yields only the
/// overshoot portion `(value - 1) * rotation`; every later step yields the
/// raw angle delta. Nothing is yielded before the value reaches 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BounceCorrection {
    armed: bool,
}

impl Default for BounceCorrection {
    fn default() -> Self {
        Self::new()
    }
}

impl BounceCorrection {
    /// Fresh correction for one turn.
    #[must_use]
    pub fn new() -> Self {
        Self { armed: true }
    }

    /// Angle to apply to the assembly this step, if any.
    pub fn correction(&mut self, value: f32, delta_angle: f32, rotation: f32) -> Option<f32> {
        if value < 1.0 {
            return None;
        }
        if self.armed {
            self.armed = false;
            Some((value - 1.0) * rotation)
        } else {
            Some(delta_angle)
        }
    }
}
