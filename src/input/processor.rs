//! Converts raw platform events into drag events and key commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! the in-progress drag sample, modifier and held face keys) and the
//! key-binding map. It
//! is the only thing that sits between raw window events and the gesture
//! controller.

use glam::Vec2;
use web_time::Instant;

use super::event::{DragEvent, InputEvent, MouseButton, PointerSample};
use super::keyboard::{ArrowKey, KeyAction};
use crate::options::KeybindingOptions;

/// A bound key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCommand {
    /// Action the key is bound to.
    pub action: KeyAction,
    /// Shift was held: layer turns become primed moves and cube rotations
    /// change direction.
    pub inverted: bool,
}

/// Converts raw window events into [`DragEvent`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(drag) = input_processor.handle_event(event, Instant::now()) {
///     controller.handle_drag(drag);
/// }
///
/// if let Some(cmd) = input_processor.handle_key_press("KeyQ") {
///     controller.key_command(cmd)?;
/// }
/// input_processor.handle_key_release("KeyQ");
/// ```
pub struct InputProcessor {
    /// Last known cursor position in element-local pixels.
    cursor: Vec2,
    /// Sample of the drag in progress, if the primary button is held.
    drag: Option<PointerSample>,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
    /// Face key held down in arrow-turn mode, with its action.
    held_face: Option<(String, KeyAction)>,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            cursor: Vec2::ZERO,
            drag: None,
            shift_pressed: false,
            held_face: None,
            key_bindings,
        }
    }

    /// Current cursor position.
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether the shift modifier is held.
    #[must_use]
    pub fn shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Look up a key press and return the bound command, if any.
    ///
    /// With arrow turns enabled a face key only selects its face; an arrow
    /// pressed while it is held produces the turn.
    pub fn handle_key_press(&mut self, key: &str) -> Option<KeyCommand> {
        if !self.key_bindings.arrow_turns {
            return self.key_bindings.lookup(key).map(|action| KeyCommand {
                action,
                inverted: self.shift_pressed,
            });
        }
        if let Some(arrow) = ArrowKey::from_code(key) {
            let (_, action) = self.held_face.as_ref()?;
            let inverted = action.arrow_turn(arrow)?;
            return Some(KeyCommand {
                action: *action,
                inverted,
            });
        }
        let action = self.key_bindings.lookup(key)?;
        if action.face().is_some() {
            self.held_face = Some((key.to_owned(), action));
            return None;
        }
        Some(KeyCommand {
            action,
            inverted: self.shift_pressed,
        })
    }

    /// A key went up. Releasing the held face key deselects its face.
    pub fn handle_key_release(&mut self, key: &str) {
        if self.held_face.as_ref().is_some_and(|(held, _)| held == key) {
            self.held_face = None;
        }
    }

    /// Process a raw input event and return zero or one drag events.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        now: Instant,
    ) -> Option<DragEvent> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = Vec2::new(x, y);
                let sample = self.drag?.moved_to(self.cursor, now);
                self.drag = Some(sample);
                Some(DragEvent::Move(sample))
            }
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: true,
            } => {
                if self.drag.is_some() {
                    return None;
                }
                let sample = PointerSample::start(self.cursor, now);
                self.drag = Some(sample);
                Some(DragEvent::Start(sample))
            }
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: false,
            } => {
                let sample = self.drag.take()?.moved_to(self.cursor, now);
                Some(DragEvent::End(sample))
            }
            InputEvent::MouseButton { .. } => None,
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                None
            }
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(pressed: bool) -> InputEvent {
        InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed,
        }
    }

    #[test]
    fn press_move_release_produces_drag_lifecycle() {
        let now = Instant::now();
        let mut input = InputProcessor::new();
        assert!(input
            .handle_event(InputEvent::CursorMoved { x: 10.0, y: 20.0 }, now)
            .is_none());

        let start = input.handle_event(press(true), now);
        assert!(matches!(start, Some(DragEvent::Start(s)) if s.start == Vec2::new(10.0, 20.0)));

        let _ = input.handle_event(InputEvent::CursorMoved { x: 15.0, y: 20.0 }, now);
        let moved = input.handle_event(InputEvent::CursorMoved { x: 18.0, y: 24.0 }, now);
        let sample = moved.map(|e| *e.sample());
        assert_eq!(sample.map(|s| s.delta), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(sample.map(|s| s.drag), Some(Vec2::new(8.0, 4.0)));

        let end = input.handle_event(press(false), now);
        assert!(matches!(end, Some(DragEvent::End(s)) if s.current == Vec2::new(18.0, 24.0)));
        assert!(!input.dragging());
    }

    #[test]
    fn other_buttons_are_ignored() {
        let mut input = InputProcessor::new();
        let right = InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        };
        assert!(input.handle_event(right, Instant::now()).is_none());
        assert!(input.handle_event(press(false), Instant::now()).is_none());
    }

    #[test]
    fn shift_inverts_key_commands() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_key_press("KeyD"),
            Some(KeyCommand {
                action: KeyAction::TurnRight,
                inverted: false
            })
        );
        let _ = input.handle_event(
            InputEvent::ModifiersChanged { shift: true },
            Instant::now(),
        );
        assert!(input.handle_key_press("KeyD").is_some_and(|c| c.inverted));
        assert!(input.handle_key_press("F13").is_none());
    }

    fn arrow_input() -> InputProcessor {
        let mut bindings = KeybindingOptions::default();
        bindings.arrow_turns = true;
        InputProcessor::with_key_bindings(bindings)
    }

    #[test]
    fn held_face_and_arrow_make_a_turn() {
        let mut input = arrow_input();
        assert!(input.handle_key_press("ArrowUp").is_none());
        assert!(input.handle_key_press("KeyA").is_none());
        assert_eq!(
            input.handle_key_press("ArrowUp"),
            Some(KeyCommand {
                action: KeyAction::TurnLeft,
                inverted: true
            })
        );
        assert_eq!(
            input.handle_key_press("ArrowDown"),
            Some(KeyCommand {
                action: KeyAction::TurnLeft,
                inverted: false
            })
        );
        // Left and right do nothing for the left face.
        assert!(input.handle_key_press("ArrowLeft").is_none());

        // Pressing another face key switches faces.
        assert!(input.handle_key_press("KeyW").is_none());
        assert_eq!(
            input.handle_key_press("ArrowRight"),
            Some(KeyCommand {
                action: KeyAction::TurnUp,
                inverted: true
            })
        );

        // Only releasing the held key clears it.
        input.handle_key_release("KeyA");
        assert!(input.handle_key_press("ArrowLeft").is_some());
        input.handle_key_release("KeyW");
        assert!(input.handle_key_press("ArrowLeft").is_none());
    }

    #[test]
    fn cube_rotations_fire_directly_in_arrow_mode() {
        let mut input = arrow_input();
        assert_eq!(
            input.handle_key_press("KeyX"),
            Some(KeyCommand {
                action: KeyAction::RotateY,
                inverted: false
            })
        );
        assert!(input.handle_key_press("ArrowUp").is_none());
    }
}
