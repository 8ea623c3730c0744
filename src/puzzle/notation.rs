use glam::Vec3;

use super::layer::LayerReference;
use super::PuzzleSize;
use crate::error::TurnError;
use crate::geometry::{Axis, QUARTER_TURN};

/// Slack allowed when checking that external coordinates sit on the grid.
const GRID_EPSILON: f32 = 1e-3;

/// A layer turn expressed in notation terms.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerMove {
    /// Rotation axis (always the positive unit axis).
    pub axis: Axis,
    /// Layer reference in layer-index units.
    pub position: Vec3,
    /// Signed number of quarter turns about `axis`.
    pub quarter_turns: i32,
    /// The token this move came from.
    pub name: String,
}

impl LayerMove {
    /// Move from an external queue entry: an axis key (`"x"`, `"y"` or
    /// `"z"`), a layer position in layer-index units and an angle in
    /// radians.
    ///
    /// # Errors
    ///
    /// [`TurnError::UnknownAxis`] for a bad axis key,
    /// [`TurnError::InvalidMove`] if `angle` is not a whole number of
    /// quarter turns.
    pub fn from_entry(
        axis_key: &str,
        position: Vec3,
        angle: f32,
    ) -> Result<Self, TurnError> {
        let axis = Axis::from_key(axis_key)?;
        let name = format!("{axis_key}{position}");
        let turns = angle / QUARTER_TURN;
        let quarter_turns = turns.round();
        if !turns.is_finite() || (turns - quarter_turns).abs() > GRID_EPSILON {
            return Err(TurnError::InvalidMove(format!(
                "{name}: {angle} rad is not a quarter-turn multiple"
            )));
        }
        Ok(Self {
            axis,
            position,
            quarter_turns: quarter_turns as i32,
            name,
        })
    }

    /// Signed rotation angle in radians.
    #[must_use]
    pub fn angle(&self) -> f32 {
        self.quarter_turns as f32 * QUARTER_TURN
    }

    /// The layer this move turns on a puzzle of `size`.
    ///
    /// # Errors
    ///
    /// [`TurnError::InvalidMove`] if `position` is off the move's axis or
    /// does not name a layer of the puzzle.
    pub fn layer_reference(
        &self,
        size: PuzzleSize,
    ) -> Result<LayerReference, TurnError> {
        let invalid =
            |reason: &str| TurnError::InvalidMove(format!("{}: {reason}", self.name));
        let along = self.axis.component(self.position);
        let off_axis = self.position - self.axis.unit() * along;
        if !self.position.is_finite() || off_axis.abs().max_element() > GRID_EPSILON {
            return Err(invalid("position is off the rotation axis"));
        }
        let index = along.round() as i32;
        if (along - index as f32).abs() > GRID_EPSILON
            || !size.layer_indices().contains(&index)
        {
            return Err(invalid("no such layer"));
        }
        Ok(LayerReference::Position {
            axis: self.axis,
            index,
        })
    }
}

/// Single face turn. An uppercase face on sizes above 3 addresses the outer
/// layer, lowercase the slice just inside it.
///
/// # Errors
///
/// [`TurnError::UnknownMove`] for a letter that is not a face.
pub fn face_move(
    face: char,
    size: PuzzleSize,
    inverted: bool,
) -> Result<LayerMove, TurnError> {
    let (axis, mut row): (Axis, i32) = match face.to_ascii_uppercase() {
        'U' => (Axis::Y, 1),
        'D' => (Axis::Y, -1),
        'R' => (Axis::X, 1),
        'L' => (Axis::X, -1),
        'F' => (Axis::Z, 1),
        'B' => (Axis::Z, -1),
        _ => return Err(TurnError::UnknownMove(face.to_string())),
    };
    if size.get() > 3 && face.is_ascii_uppercase() {
        row *= 2;
    }
    let direction = if inverted { 1 } else { -1 };
    let name = if inverted {
        format!("{face}'")
    } else {
        face.to_string()
    };
    Ok(LayerMove {
        axis,
        position: axis.unit() * row as f32,
        quarter_turns: direction * row.signum(),
        name,
    })
}

/// Parse one token (`R`, `u'`, `F2`, ...). A `2` suffix yields the move
/// twice.
///
/// # Errors
///
/// [`TurnError::UnknownMove`] naming the whole token.
pub fn parse_move(
    token: &str,
    size: PuzzleSize,
) -> Result<Vec<LayerMove>, TurnError> {
    let unknown = || TurnError::UnknownMove(token.to_owned());
    let mut chars = token.chars();
    let face = chars.next().ok_or_else(unknown)?;
    let modifier = chars.next();
    if chars.next().is_some() {
        return Err(unknown());
    }

    let (inverted, repeat) = match modifier {
        None => (false, 1),
        Some('\'') => (true, 1),
        Some('2') => (false, 2),
        Some(_) => return Err(unknown()),
    };
    let mut turn = face_move(face, size, inverted).map_err(|_| unknown())?;
    turn.name = token.to_owned();
    Ok(vec![turn; repeat])
}

/// Parse a whitespace-separated sequence.
///
/// # Errors
///
/// The first token that fails [`parse_move`].
pub fn parse_sequence(
    text: &str,
    size: PuzzleSize,
) -> Result<Vec<LayerMove>, TurnError> {
    let mut moves = Vec::new();
    for token in text.split_whitespace() {
        moves.extend(parse_move(token, size)?);
    }
    Ok(moves)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> PuzzleSize {
        PuzzleSize::default()
    }

    #[test]
    fn faces_map_to_axis_and_row() {
        let r = face_move('R', three(), false).unwrap();
        assert_eq!(r.axis, Axis::X);
        assert_eq!(r.position, Vec3::X);
        assert_eq!(r.quarter_turns, -1);

        let b = face_move('B', three(), false).unwrap();
        assert_eq!(b.position, Vec3::NEG_Z);
        assert_eq!(b.quarter_turns, 1);
    }

    #[test]
    fn prime_inverts_and_two_repeats() {
        let moves = parse_sequence("U' F2", three()).unwrap();
        assert_eq!(moves.len(), 3);
        assert_eq!(moves[0].quarter_turns, 1);
        assert_eq!(moves[0].name, "U'");
        assert_eq!(moves[1], moves[2]);
        assert_eq!(moves[1].name, "F2");
    }

    #[test]
    fn big_cube_case_selects_depth() {
        let four = PuzzleSize::new(4).unwrap();
        let outer = face_move('L', four, false).unwrap();
        let inner = face_move('l', four, false).unwrap();
        assert_eq!(outer.position, Vec3::new(-2.0, 0.0, 0.0));
        assert_eq!(inner.position, Vec3::NEG_X);
        assert_eq!(outer.quarter_turns, inner.quarter_turns);
        // Lowercase on small cubes is the same layer.
        assert_eq!(
            face_move('l', three(), false).unwrap().position,
            Vec3::NEG_X
        );
    }

    #[test]
    fn notation_moves_reference_their_layer() {
        let r = face_move('R', three(), false).unwrap();
        assert_eq!(
            r.layer_reference(three()).unwrap(),
            LayerReference::Position {
                axis: Axis::X,
                index: 1
            }
        );
        let outer = face_move('D', PuzzleSize::new(5).unwrap(), true).unwrap();
        assert_eq!(
            outer.layer_reference(PuzzleSize::new(5).unwrap()).unwrap(),
            LayerReference::Position {
                axis: Axis::Y,
                index: -2
            }
        );
    }

    #[test]
    fn queue_entries_parse_axis_keys() {
        let middle = LayerMove::from_entry("y", Vec3::ZERO, -QUARTER_TURN).unwrap();
        assert_eq!(middle.axis, Axis::Y);
        assert_eq!(middle.quarter_turns, -1);
        assert_eq!(
            middle.layer_reference(three()).unwrap(),
            LayerReference::Position {
                axis: Axis::Y,
                index: 0
            }
        );
        assert!(matches!(
            LayerMove::from_entry("w", Vec3::X, QUARTER_TURN),
            Err(TurnError::UnknownAxis(k)) if k == "w"
        ));
        assert!(matches!(
            LayerMove::from_entry("x", Vec3::X, 0.3),
            Err(TurnError::InvalidMove(_))
        ));
    }

    #[test]
    fn misrouted_positions_are_rejected() {
        let mut turn = face_move('R', three(), false).unwrap();
        turn.position = Vec3::Y;
        assert!(matches!(
            turn.layer_reference(three()),
            Err(TurnError::InvalidMove(_))
        ));
        turn.position = Vec3::new(3.0, 0.0, 0.0);
        assert!(turn.layer_reference(three()).is_err());
        turn.position = Vec3::new(0.5, 0.0, 0.0);
        assert!(turn.layer_reference(three()).is_err());
        // Even sizes have no middle slice.
        turn.position = Vec3::ZERO;
        assert!(turn.layer_reference(PuzzleSize::new(4).unwrap()).is_err());
    }

    #[test]
    fn unknown_tokens_fail() {
        for bad in ["X", "R3", "R''", "Rw2"] {
            assert!(
                matches!(parse_move(bad, three()), Err(TurnError::UnknownMove(t)) if t == bad),
                "{bad}"
            );
        }
        assert!(parse_sequence("R U Q", three()).is_err());
        assert!(parse_sequence("   ", three()).unwrap().is_empty());
    }
}
