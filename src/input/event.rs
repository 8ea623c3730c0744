use glam::Vec2;
use web_time::Instant;

/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`DragEvent`]s for the gesture controller.
///
/// # Example
///
/// ```ignore
/// if let Some(drag) = input_processor.handle_event(
///     InputEvent::CursorMoved { x: 100.0, y: 200.0 },
///     Instant::now(),
/// ) {
///     controller.handle_drag(drag);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to an element-local position.
    CursorMoved {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether the shift key is held.
        shift: bool,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button, or a touch.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

/// Normalized pointer state for one drag event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Pointer position in element-local pixels.
    pub current: Vec2,
    /// Where the drag started.
    pub start: Vec2,
    /// Movement since the previous sample.
    pub delta: Vec2,
    /// Total movement since the drag started.
    pub drag: Vec2,
    /// When the sample was taken.
    pub timestamp: Instant,
}

impl PointerSample {
    /// Sample for a drag starting at `position`.
    #[must_use]
    pub fn start(position: Vec2, timestamp: Instant) -> Self {
        Self {
            current: position,
            start: position,
            delta: Vec2::ZERO,
            drag: Vec2::ZERO,
            timestamp,
        }
    }

    /// Follow-up sample after moving to `position`.
    #[must_use]
    pub fn moved_to(&self, position: Vec2, timestamp: Instant) -> Self {
        Self {
            current: position,
            start: self.start,
            delta: position - self.current,
            drag: position - self.start,
            timestamp,
        }
    }
}

/// Drag lifecycle events consumed by the gesture controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// Pointer went down.
    Start(PointerSample),
    /// Pointer moved while down.
    Move(PointerSample),
    /// Pointer released.
    End(PointerSample),
}

impl DragEvent {
    /// The sample carried by this event.
    #[must_use]
    pub fn sample(&self) -> &PointerSample {
        match self {
            Self::Start(s) | Self::Move(s) | Self::End(s) => s,
        }
    }
}
