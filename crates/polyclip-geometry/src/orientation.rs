//! Winding normalization applied to each polygon set before it reaches a clip oracle.

use polyclip_core::{Polygon, Winding};

/// Index of the polygon treated as the outer boundary of a set.
pub const DEFAULT_OUTER_INDEX: usize = 0;

/// Bring `polygons` into the winding convention clip engines expect.
///
/// When the polygon at `outer` is clockwise the set is returned as is. Otherwise
/// every polygon, outer included, is reversed. A degenerate outer polygon (winding
/// sum of exactly zero) cannot be made clockwise by reversal and passes through
/// unchanged, as does a set with no polygon at `outer`. The input is never mutated.
pub fn normalize(polygons: &[Polygon], outer: usize) -> Vec<Polygon> {
    match polygons.get(outer) {
        Some(p) if needs_reversal(p) => polygons.iter().map(Polygon::reversed).collect(),
        _ => polygons.to_vec(),
    }
}

fn needs_reversal(outer: &Polygon) -> bool {
    outer.winding() == Winding::CounterClockwise && outer.winding_sum() != 0.0
}
