use std::collections::VecDeque;

use glam::Vec2;
use web_time::{Duration, Instant};

/// Recency-weighted average of recent drag deltas.
///
/// Samples older than the window are dropped; the rest are averaged with
/// weights 1, 2, ..., n from oldest to newest. Only meant to tell a gesture
/// that is still moving apart from one that has stopped.
#[derive(Debug, Clone)]
pub struct MomentumTracker {
    window: Duration,
    samples: VecDeque<(Vec2, Instant)>,
}

impl Default for MomentumTracker {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW)
    }
}

impl MomentumTracker {
    /// Default sliding window.
    pub const DEFAULT_WINDOW: Duration = Duration::from_millis(500);

    /// Tracker with the given window.
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            samples: VecDeque::new(),
        }
    }

    /// Forget every sample.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Number of samples currently retained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no samples are retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Record a delta observed at `now`.
    pub fn push(&mut self, delta: Vec2, now: Instant) {
        self.expire(now);
        self.samples.push_back((delta, now));
    }

    /// Weighted average of the samples still inside the window at `now`.
    pub fn momentum(&mut self, now: Instant) -> Vec2 {
        self.expire(now);
        let (sum, norm) = self.samples.iter().enumerate().fold(
            (Vec2::ZERO, 0.0),
            |(sum, norm), (i, (delta, _))| {
                let w = (i + 1) as f32;
                (sum + *delta * w, norm + w)
            },
        );
        if norm > 0.0 {
            sum / norm
        } else {
            Vec2::ZERO
        }
    }

    fn expire(&mut self, now: Instant) {
        while self
            .samples
            .front()
            .is_some_and(|(_, t)| now.saturating_duration_since(*t) >= self.window)
        {
            let _ = self.samples.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(start: Instant, offset: u64) -> Instant {
        start + Duration::from_millis(offset)
    }

    #[test]
    fn empty_is_zero() {
        let mut tracker = MomentumTracker::default();
        assert_eq!(tracker.momentum(Instant::now()), Vec2::ZERO);
    }

    #[test]
    fn newest_sample_weighs_most() {
        let start = Instant::now();
        let mut tracker = MomentumTracker::default();
        tracker.push(Vec2::new(0.0, 0.0), ms(start, 0));
        tracker.push(Vec2::new(0.3, 0.0), ms(start, 10));
        // (0 * 1 + 0.3 * 2) / 3
        let m = tracker.momentum(ms(start, 20));
        assert!((m.x - 0.2).abs() < 1e-6);
        assert_eq!(m.y, 0.0);
    }

    #[test]
    fn old_samples_leave_the_window() {
        let start = Instant::now();
        let mut tracker = MomentumTracker::default();
        tracker.push(Vec2::new(1.0, 0.0), ms(start, 0));
        tracker.push(Vec2::new(0.0, 1.0), ms(start, 300));
        assert_eq!(tracker.len(), 2);

        let m = tracker.momentum(ms(start, 600));
        assert_eq!(m, Vec2::new(0.0, 1.0));
        assert_eq!(tracker.len(), 1);

        assert_eq!(tracker.momentum(ms(start, 900)), Vec2::ZERO);
        assert!(tracker.is_empty());
    }

    #[test]
    fn push_expires_before_appending() {
        let start = Instant::now();
        let mut tracker = MomentumTracker::new(Duration::from_millis(100));
        tracker.push(Vec2::X, ms(start, 0));
        tracker.push(Vec2::Y, ms(start, 150));
        assert_eq!(tracker.len(), 1);
        tracker.clear();
        assert!(tracker.is_empty());
    }
}
