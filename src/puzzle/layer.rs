use glam::Vec3;

use super::{Cube, PieceId};
use crate::geometry::Axis;

/// What a layer is selected from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayerReference {
    /// The layer perpendicular to `axis` that contains `piece`.
    Piece {
        /// Rotation axis in the assembly frame; only its dominant axis
        /// matters.
        axis: Vec3,
        /// Piece the gesture started on.
        piece: PieceId,
    },
    /// An explicit layer, as produced by move notation.
    Position {
        /// Axis the layer is perpendicular to.
        axis: Axis,
        /// Layer index along `axis`.
        index: i32,
    },
}

/// One rotation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    /// Axis the layer is perpendicular to.
    pub axis: Axis,
    /// Quantized coordinate shared by every piece in the layer.
    pub index: i32,
    /// Members, in piece order.
    pub pieces: Vec<PieceId>,
}

/// Resolve a layer.
///
/// Returns `None` only for a piece reference to a piece that does not
/// exist. A position reference outside the puzzle yields an empty layer.
#[must_use]
pub fn select_layer(cube: &Cube, reference: LayerReference) -> Option<Layer> {
    let size = cube.size();
    let (axis, index) = match reference {
        LayerReference::Piece { axis, piece } => {
            let axis = Axis::dominant(axis);
            let position = cube.piece_in_assembly(piece)?.translation;
            (axis, axis.component(size.quantize(position).as_vec3()) as i32)
        }
        LayerReference::Position { axis, index } => (axis, index),
    };

    let pieces = cube
        .pieces()
        .iter()
        .filter(|p| {
            cube.piece_in_assembly(p.id).is_some_and(|pose| {
                let cell = size.quantize(pose.translation).as_vec3();
                axis.component(cell) as i32 == index
            })
        })
        .map(|p| p.id)
        .collect();

    log::debug!("selected layer {axis:?}={index}");
    Some(Layer {
        axis,
        index,
        pieces,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::PuzzleSize;

    fn cube(n: u8) -> Cube {
        Cube::new(PuzzleSize::new(n).unwrap())
    }

    #[test]
    fn middle_layer_of_three_has_nine_pieces() {
        let cube = cube(3);
        let center = cube
            .pieces()
            .iter()
            .find(|p| p.local.translation.length() < 1e-6)
            .map(|p| p.id)
            .unwrap();
        let layer = select_layer(
            &cube,
            LayerReference::Piece {
                axis: Vec3::new(0.0, 0.0, -1.0),
                piece: center,
            },
        )
        .unwrap();
        assert_eq!(layer.axis, Axis::Z);
        assert_eq!(layer.index, 0);
        assert_eq!(layer.pieces.len(), 9);
    }

    #[test]
    fn selection_is_deterministic() {
        let cube = cube(4);
        let reference = LayerReference::Position {
            axis: Axis::Y,
            index: -2,
        };
        let a = select_layer(&cube, reference);
        let b = select_layer(&cube, reference);
        assert_eq!(a, b);
        assert_eq!(a.map(|l| l.pieces.len()), Some(16));
    }

    #[test]
    fn every_piece_is_in_exactly_one_layer_per_axis() {
        for n in 2..=5 {
            let cube = cube(n);
            let size = PuzzleSize::new(n).unwrap();
            let rows = size.layer_indices();
            let expected: &[i32] = match n {
                2 => &[-1, 1],
                3 => &[-1, 0, 1],
                4 => &[-2, -1, 1, 2],
                _ => &[-2, -1, 0, 1, 2],
            };
            assert_eq!(rows, expected);
            for axis in Axis::ALL {
                let mut seen = vec![0; cube.pieces().len()];
                for row in &rows {
                    let layer = select_layer(
                        &cube,
                        LayerReference::Position { axis, index: *row },
                    )
                    .unwrap();
                    assert_eq!(layer.pieces.len(), usize::from(n) * usize::from(n));
                    for id in layer.pieces {
                        seen[id.0] += 1;
                    }
                }
                assert!(seen.iter().all(|&count| count == 1), "size {n} {axis:?}");
            }
        }
    }

    #[test]
    fn middle_slices_keep_their_axis() {
        let cube = cube(3);
        for axis in Axis::ALL {
            let layer =
                select_layer(&cube, LayerReference::Position { axis, index: 0 }).unwrap();
            assert_eq!(layer.axis, axis);
            assert_eq!(layer.pieces.len(), 9);
            for id in &layer.pieces {
                let position = cube.piece_in_assembly(*id).unwrap().translation;
                assert!(axis.component(position).abs() < 1e-5, "{axis:?}");
            }
        }
    }

    #[test]
    fn rows_outside_the_puzzle_are_empty() {
        let layer = select_layer(
            &cube(3),
            LayerReference::Position {
                axis: Axis::X,
                index: 3,
            },
        );
        assert!(layer.is_some_and(|l| l.pieces.is_empty()));
    }

    #[test]
    fn unknown_piece_yields_none() {
        let cube = cube(2);
        let reference = LayerReference::Piece {
            axis: Vec3::X,
            piece: PieceId(999),
        };
        assert!(select_layer(&cube, reference).is_none());
    }
}
