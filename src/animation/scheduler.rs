//! Frame-driven cooperative scheduler for active tweens.

use web_time::Duration;

use super::tween::{Tween, TweenFrame};

/// Handle to a scheduled tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweenId(u64);

struct Entry<T> {
    id: TweenId,
    tween: Tween,
    payload: T,
}

/// Owns every running tween and advances them once per frame.
///
/// Each tween carries a payload `T` describing what it animates. The update
/// callback receives that payload on every step; a finished tween is
/// deregistered exactly once and its payload is handed back to the caller,
/// which runs the completion logic.
pub struct Scheduler<T> {
    next_id: u64,
    active: Vec<Entry<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    /// Empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 0,
            active: Vec::new(),
        }
    }

    /// Register a tween.
    pub fn start(&mut self, tween: Tween, payload: T) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.active.push(Entry { id, tween, payload });
        id
    }

    /// Cancel a tween without completing it, returning its payload.
    pub fn stop(&mut self, id: TweenId) -> Option<T> {
        let index = self.active.iter().position(|e| e.id == id)?;
        Some(self.active.remove(index).payload)
    }

    /// Whether `id` is still running.
    #[must_use]
    pub fn is_active(&self, id: TweenId) -> bool {
        self.active.iter().any(|e| e.id == id)
    }

    /// Number of running tweens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether nothing is running.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Advance every tween by `dt`, in start order.
    ///
    /// Returns the payloads of tweens that finished during this tick, in the
    /// order they finished.
    pub fn tick<F>(&mut self, dt: Duration, mut update: F) -> Vec<T>
    where
        F: FnMut(&mut T, &TweenFrame),
    {
        let mut completed = Vec::new();
        let mut i = 0;
        while i < self.active.len() {
            let entry = &mut self.active[i];
            let finished = entry.tween.advance(dt).is_some_and(|frame| {
                update(&mut entry.payload, &frame);
                frame.finished
            });
            if finished {
                completed.push(self.active.remove(i).payload);
            } else {
                i += 1;
            }
        }
        completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::easing::EasingFunction;

    const FRAME: Duration = Duration::from_millis(16);

    fn tween(ms: u64) -> Tween {
        Tween::new(Duration::from_millis(ms), EasingFunction::Linear)
    }

    #[test]
    fn completes_once_in_finish_order() {
        let mut scheduler = Scheduler::new();
        let _ = scheduler.start(tween(100), "slow");
        let _ = scheduler.start(tween(20), "fast");

        let mut completed = Vec::new();
        let mut totals = [0.0_f32; 2];
        for _ in 0..20 {
            completed.extend(scheduler.tick(FRAME, |name, frame| {
                totals[usize::from(*name == "fast")] += frame.delta;
            }));
        }
        assert_eq!(completed, vec!["fast", "slow"]);
        assert!(scheduler.is_empty());
        assert!(totals.iter().all(|t| (t - 1.0).abs() < 1e-5));
    }

    #[test]
    fn stop_cancels_completion() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.start(tween(50), 7);
        assert!(scheduler.tick(FRAME, |_, _| {}).is_empty());
        assert_eq!(scheduler.stop(id), Some(7));
        assert_eq!(scheduler.stop(id), None);
        assert!(!scheduler.is_active(id));
        for _ in 0..10 {
            assert!(scheduler.tick(FRAME, |_, _| {}).is_empty());
        }
    }

    #[test]
    fn payload_is_mutable_during_updates() {
        let mut scheduler = Scheduler::new();
        let _ = scheduler.start(tween(32), 0.0_f32);
        let mut done = Vec::new();
        while done.is_empty() {
            done = scheduler.tick(FRAME, |acc, frame| *acc += frame.delta * 90.0);
        }
        assert!((done[0] - 90.0).abs() < 1e-3);
    }
}
