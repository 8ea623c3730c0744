//! Shared utilities: easing curves and the frame clock that paces
//! animation playback.

pub mod easing;
/// Per-frame deltas and FPS smoothing.
pub mod frame_timing;
