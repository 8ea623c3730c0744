use serde::{Deserialize, Serialize};

use crate::geometry::Axis;

/// Puzzle actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// turn_front = "KeyQ"
/// rotate_y = "KeyX"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Turn the front face.
    TurnFront,
    /// Turn the top face.
    TurnUp,
    /// Turn the back face.
    TurnBack,
    /// Turn the left face.
    TurnLeft,
    /// Turn the bottom face.
    TurnDown,
    /// Turn the right face.
    TurnRight,
    /// Rotate the whole cube about x.
    RotateX,
    /// Rotate the whole cube about y.
    RotateY,
    /// Rotate the whole cube about z.
    RotateZ,
}

impl KeyAction {
    /// Notation face for layer turns.
    #[must_use]
    pub fn face(self) -> Option<char> {
        match self {
            Self::TurnFront => Some('F'),
            Self::TurnUp => Some('U'),
            Self::TurnBack => Some('B'),
            Self::TurnLeft => Some('L'),
            Self::TurnDown => Some('D'),
            Self::TurnRight => Some('R'),
            Self::RotateX | Self::RotateY | Self::RotateZ => None,
        }
    }

    /// Axis for whole-cube rotations.
    #[must_use]
    pub fn cube_axis(self) -> Option<Axis> {
        match self {
            Self::RotateX => Some(Axis::X),
            Self::RotateY => Some(Axis::Y),
            Self::RotateZ => Some(Axis::Z),
            _ => None,
        }
    }

    /// Turn direction for an arrow pressed while this face key is held:
    /// `Some(inverted)`, or `None` if the arrow does not turn this face.
    ///
    /// Side faces take up and down, the others take left and right.
    #[must_use]
    pub fn arrow_turn(self, arrow: ArrowKey) -> Option<bool> {
        use ArrowKey::{Down, Left, Right, Up};
        match (self, arrow) {
            (Self::TurnLeft, Down)
            | (Self::TurnRight, Up)
            | (Self::TurnUp, Left)
            | (Self::TurnDown, Right)
            | (Self::TurnFront, Right)
            | (Self::TurnBack, Left) => Some(false),
            (Self::TurnLeft, Up)
            | (Self::TurnRight, Down)
            | (Self::TurnUp, Right)
            | (Self::TurnDown, Left)
            | (Self::TurnFront, Left)
            | (Self::TurnBack, Right) => Some(true),
            _ => None,
        }
    }
}

/// Arrow keys, as used for held-face turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowKey {
    /// `ArrowLeft`.
    Left,
    /// `ArrowRight`.
    Right,
    /// `ArrowUp`.
    Up,
    /// `ArrowDown`.
    Down,
}

impl ArrowKey {
    /// Arrow for a key code.
    #[must_use]
    pub fn from_code(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_turn_table() {
        use ArrowKey::{Down, Left, Right, Up};
        let cases = [
            (KeyAction::TurnLeft, Up, Some(true)),
            (KeyAction::TurnLeft, Down, Some(false)),
            (KeyAction::TurnLeft, Left, None),
            (KeyAction::TurnRight, Up, Some(false)),
            (KeyAction::TurnRight, Down, Some(true)),
            (KeyAction::TurnUp, Left, Some(false)),
            (KeyAction::TurnUp, Right, Some(true)),
            (KeyAction::TurnUp, Down, None),
            (KeyAction::TurnDown, Left, Some(true)),
            (KeyAction::TurnDown, Right, Some(false)),
            (KeyAction::TurnFront, Left, Some(true)),
            (KeyAction::TurnFront, Right, Some(false)),
            (KeyAction::TurnBack, Left, Some(false)),
            (KeyAction::TurnBack, Right, Some(true)),
            (KeyAction::RotateX, Up, None),
        ];
        for (action, arrow, expected) in cases {
            assert_eq!(action.arrow_turn(arrow), expected, "{action:?} + {arrow:?}");
        }
    }

    #[test]
    fn arrow_codes() {
        assert_eq!(ArrowKey::from_code("ArrowUp"), Some(ArrowKey::Up));
        assert_eq!(ArrowKey::from_code("KeyW"), None);
    }
}
