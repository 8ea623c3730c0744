//! Input handling: event types, the momentum tracker, and the input
//! processor that converts raw window events into drag events.

/// Platform-agnostic input events and pointer samples.
pub mod event;
/// Bindable keyboard actions.
pub mod keyboard;
/// Recency-weighted drag velocity.
pub mod momentum;
/// Converts raw events into drag events and key commands.
pub mod processor;

pub use event::{DragEvent, InputEvent, MouseButton, PointerSample};
pub use keyboard::{ArrowKey, KeyAction};
pub use momentum::MomentumTracker;
pub use processor::{InputProcessor, KeyCommand};
