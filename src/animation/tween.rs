//! A single timed animation.

use web_time::Duration;

use crate::util::easing::EasingFunction;

/// Snapshot handed to the update callback each step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenFrame {
    /// Linear progress in [0, 1].
    pub progress: f32,
    /// Eased value (may leave [0, 1] for overshooting curves).
    pub value: f32,
    /// Change in `value` since the previous step.
    pub delta: f32,
    /// Whether this is the final step.
    pub finished: bool,
}

/// Progress → eased value → delta, advanced by frame time.
///
/// The deltas of a tween that runs to completion sum to exactly 1: the
/// final step clamps the value to 1 rather than evaluating the curve past
/// its end.
#[derive(Debug, Clone)]
pub struct Tween {
    duration: Duration,
    easing: EasingFunction,
    /// Time still to wait before progress starts moving.
    delay: Duration,
    /// `Some(reversing)` in ping-pong mode.
    yoyo: Option<bool>,
    progress: f32,
    value: f32,
    finished: bool,
}

impl Tween {
    /// Tween over `duration` following `easing`.
    #[must_use]
    pub fn new(duration: Duration, easing: EasingFunction) -> Self {
        Self {
            duration,
            easing,
            delay: Duration::ZERO,
            yoyo: None,
            progress: 0.0,
            value: 0.0,
            finished: false,
        }
    }

    /// Wait `delay` before starting.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Bounce between 0 and 1 forever instead of completing.
    #[must_use]
    pub fn yoyo(mut self) -> Self {
        self.yoyo = Some(false);
        self
    }

    /// Linear progress.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Current eased value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Whether the final step has been produced.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance by `dt`.
    ///
    /// Returns `None` while delayed or after the tween has finished.
    pub fn advance(&mut self, dt: Duration) -> Option<TweenFrame> {
        if self.finished {
            return None;
        }
        let dt = if self.delay.is_zero() {
            dt
        } else if let Some(rest) = dt.checked_sub(self.delay) {
            self.delay = Duration::ZERO;
            rest
        } else {
            self.delay = self.delay.saturating_sub(dt);
            return None;
        };

        let old = self.value;
        let step = if self.duration.is_zero() {
            1.0
        } else {
            dt.as_secs_f32() / self.duration.as_secs_f32()
        };
        let reversing = self.yoyo == Some(true);
        self.progress += if reversing { -step } else { step };
        self.value = self.easing.evaluate(self.progress);

        if let Some(reversing) = self.yoyo {
            if !(0.0..=1.0).contains(&self.progress) {
                self.progress = self.progress.clamp(0.0, 1.0);
                self.value = self.progress;
                self.yoyo = Some(!reversing);
            }
        } else if self.progress >= 1.0 {
            self.progress = 1.0;
            self.value = 1.0;
            self.finished = true;
        }

        Some(TweenFrame {
            progress: self.progress,
            value: self.value,
            delta: self.value - old,
            finished: self.finished,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn run(tween: &mut Tween) -> Vec<TweenFrame> {
        std::iter::from_fn(|| tween.advance(FRAME)).collect()
    }

    #[test]
    fn deltas_sum_to_one() {
        for easing in [
            EasingFunction::PowerOut(3),
            EasingFunction::SineOut,
            EasingFunction::BackOut { overshoot: 1.5 },
        ] {
            let mut tween = Tween::new(Duration::from_millis(125), easing);
            let frames = run(&mut tween);
            let total: f32 = frames.iter().map(|f| f.delta).sum();
            assert!((total - 1.0).abs() < 1e-5, "{easing:?}: {total}");
            assert_eq!(frames.iter().filter(|f| f.finished).count(), 1);
            assert!(frames.last().is_some_and(|f| f.finished && f.value == 1.0));
        }
    }

    #[test]
    fn finishes_after_duration() {
        let mut tween = Tween::new(Duration::from_millis(100), EasingFunction::Linear);
        // 6 * 16ms = 96ms, 7th frame crosses the end.
        assert_eq!(run(&mut tween).len(), 7);
        assert!(tween.is_finished());
        assert!(tween.advance(FRAME).is_none());
    }

    #[test]
    fn zero_duration_finishes_on_first_step() {
        let mut tween = Tween::new(Duration::ZERO, EasingFunction::Linear);
        let frame = tween.advance(Duration::ZERO);
        assert!(frame.is_some_and(|f| f.finished && f.delta == 1.0));
    }

    #[test]
    fn delay_holds_progress() {
        let mut tween = Tween::new(Duration::from_millis(100), EasingFunction::Linear)
            .with_delay(Duration::from_millis(30));
        assert!(tween.advance(FRAME).is_none());
        let frame = tween.advance(FRAME);
        // 2ms of the second frame spill into the tween.
        assert!(frame.is_some_and(|f| (f.progress - 0.02).abs() < 1e-4));
    }

    #[test]
    fn yoyo_reflects_and_never_finishes() {
        let mut tween = Tween::new(Duration::from_millis(50), EasingFunction::Linear).yoyo();
        let mut peaked = false;
        for _ in 0..20 {
            let frame = tween.advance(FRAME);
            assert!(frame.is_some_and(|f| !f.finished && (0.0..=1.0).contains(&f.progress)));
            peaked |= tween.progress() == 1.0;
        }
        assert!(peaked);
        assert!(!tween.is_finished());
    }
}
