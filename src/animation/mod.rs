//! Time-driven rotation playback.
//!
//! A [`Tween`] maps elapsed time to an eased value and reports the change
//! since its last step; the [`Scheduler`] advances every running tween once
//! per frame and hands back the ones that finished.

pub mod bounce;
pub mod scheduler;
pub mod tween;

pub use bounce::BounceCorrection;
pub use scheduler::{Scheduler, TweenId};
pub use tween::{Tween, TweenFrame};
