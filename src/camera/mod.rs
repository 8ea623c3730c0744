//! Camera for picking.
//!
//! Provides the isometric perspective camera the puzzle is viewed through,
//! plus the pixel/NDC conversions pointer samples need before they can be
//! turned into rays.

/// Core camera struct and viewport conversions.
pub mod core;

pub use self::core::{Camera, Viewport};
