use web_time::{Duration, Instant};

/// Frame clock producing per-frame deltas for the animation scheduler,
/// with FPS smoothing and optional frame limiting.
pub struct FrameClock {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Longest delta handed out in one tick
    max_frame_delta: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Deltas longer than this (tab switch, debugger pause) are clamped so
    /// a resumed animation does not jump straight to its end.
    pub const DEFAULT_MAX_DELTA: Duration = Duration::from_millis(100);

    /// Create a new frame clock with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        Self::starting_at(target_fps, Instant::now())
    }

    /// Create a frame clock whose first frame is measured from `start`.
    #[must_use]
    pub fn starting_at(target_fps: u32, start: Instant) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            max_frame_delta: Self::DEFAULT_MAX_DELTA,
            last_frame: start,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Minimum time between frames for the configured target.
    #[must_use]
    pub fn frame_budget(&self) -> Duration {
        self.min_frame_duration
    }

    /// Whether enough time has passed since the last tick to render.
    #[must_use]
    pub fn should_render(&self, now: Instant) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        now.saturating_duration_since(self.last_frame) >= self.min_frame_duration
    }

    /// Mark a frame at `now` and return the (clamped) delta since the
    /// previous one.
    pub fn tick(&mut self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        elapsed.min(self.max_frame_delta)
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_returns_elapsed_time() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(60, start);
        let delta = clock.tick(start + Duration::from_millis(16));
        assert_eq!(delta, Duration::from_millis(16));
    }

    #[test]
    fn tick_clamps_long_pauses() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(60, start);
        let delta = clock.tick(start + Duration::from_secs(3));
        assert_eq!(delta, FrameClock::DEFAULT_MAX_DELTA);
    }

    #[test]
    fn frame_limiting() {
        let start = Instant::now();
        let clock = FrameClock::starting_at(50, start);
        assert!(!clock.should_render(start + Duration::from_millis(5)));
        assert!(clock.should_render(start + Duration::from_millis(20)));
        assert!(FrameClock::starting_at(0, start).should_render(start));
    }
}
