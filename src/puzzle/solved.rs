use glam::Vec3;
use rustc_hash::FxHashMap;

use super::Face;
use crate::geometry::Axis;

/// Which side of the puzzle a marker sits on: dominant axis and sign of its
/// position relative to the assembly center.
#[must_use]
pub fn side_of(position: Vec3) -> (Axis, bool) {
    let axis = Axis::dominant(position);
    (axis, axis.component(position) > 0.0)
}

/// Whether every side's markers all carry the same face tag.
///
/// Only meaningful for a settled puzzle; mid-rotation positions put markers
/// on the wrong side.
#[must_use]
pub fn is_solved<I>(markers: I) -> bool
where
    I: IntoIterator<Item = (Face, Vec3)>,
{
    let mut sides: FxHashMap<(Axis, bool), Face> = FxHashMap::default();
    for (face, position) in markers {
        let first = *sides.entry(side_of(position)).or_insert(face);
        if first != face {
            return false;
        }
    }
    true
}
