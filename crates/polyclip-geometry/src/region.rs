use cavalier_contours::polyline::{
    BooleanOp, BooleanResultInfo, PlineOrientation, PlineSource, PlineSourceMut, Polyline,
};
use tracing::trace;

use crate::primitives::is_valid_closed_polyline;

const REDUNDANT_VERTEX_EPS: f64 = 1e-6;

/// A filled area: outer boundaries in `pos`, holes in `neg`.
///
/// Orientations follow cavalier's y-up convention: boundaries counter-clockwise,
/// holes clockwise. On a y-down canvas that reads as clockwise boundaries.
#[derive(Debug, Clone, Default)]
pub struct Region {
    pub pos: Vec<Polyline<f64>>,
    pub neg: Vec<Polyline<f64>>,
}

/// The boolean engine refused one of its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("boolean operation rejected its input")]
pub struct InvalidInput;

impl Region {
    pub fn is_empty(&self) -> bool {
        self.pos.is_empty()
    }

    /// Union of closed shapes, each treated as filled regardless of its winding.
    pub fn union_all(plines: Vec<Polyline<f64>>) -> Self {
        let plines = orient(prepare(plines), PlineOrientation::CounterClockwise);
        let (pos, holes) = merge_overlapping(plines);
        let neg = if holes.is_empty() {
            holes
        } else {
            merge_overlapping(orient(holes, PlineOrientation::CounterClockwise)).0
        };
        Self {
            pos: orient(pos, PlineOrientation::CounterClockwise),
            neg: orient(neg, PlineOrientation::Clockwise),
        }
    }

    pub fn subtract_all(&mut self, cutters: &[Polyline<f64>]) {
        let mut new_pos: Vec<Polyline<f64>> = Vec::new();
        let mut new_neg: Vec<Polyline<f64>> = Vec::new();

        for p in std::mem::take(&mut self.pos) {
            let mut cur_pos = vec![p];

            for c in cutters {
                let mut next_pos: Vec<Polyline<f64>> = Vec::new();
                for cp in cur_pos {
                    let res = cp.boolean(c, BooleanOp::Not);
                    next_pos.extend(res.pos_plines.into_iter().map(|p| p.pline));
                    new_neg.extend(res.neg_plines.into_iter().map(|p| p.pline));
                }
                cur_pos = next_pos;
            }

            new_pos.extend(cur_pos);
        }

        let pos = merge_overlapping(orient(prepare(new_pos), PlineOrientation::CounterClockwise)).0;
        self.pos = orient(pos, PlineOrientation::CounterClockwise);
        let neg = merge_overlapping(orient(prepare(new_neg), PlineOrientation::CounterClockwise)).0;
        self.neg.extend(orient(neg, PlineOrientation::Clockwise));
    }

    /// Area covered by both `self` and `other`.
    pub fn intersect(&self, other: &Region) -> Result<Region, InvalidInput> {
        let mut out_pos: Vec<Polyline<f64>> = Vec::new();
        let mut out_neg: Vec<Polyline<f64>> = Vec::new();

        for pa in &self.pos {
            for pb in &other.pos {
                let res = pa.boolean(pb, BooleanOp::And);
                match &res.result_info {
                    BooleanResultInfo::InvalidInput => return Err(InvalidInput),
                    BooleanResultInfo::Disjoint => continue,
                    info => trace!(?info, "boundary pair intersects"),
                }
                out_pos.extend(res.pos_plines.into_iter().map(|p| p.pline));
                out_neg.extend(res.neg_plines.into_iter().map(|p| p.pline));
            }
        }

        let mut region = Region::union_all(out_pos);
        for holes in [&out_neg, &self.neg, &other.neg] {
            if !holes.is_empty() && !region.is_empty() {
                region.subtract_all(holes);
            }
        }
        Ok(region)
    }

    /// Outer boundaries first, then holes.
    pub fn boundaries(&self) -> impl Iterator<Item = &Polyline<f64>> {
        self.pos.iter().chain(self.neg.iter())
    }
}

fn prepare(mut plines: Vec<Polyline<f64>>) -> Vec<Polyline<f64>> {
    plines.retain(is_valid_closed_polyline);
    plines.into_iter().map(simplify).collect()
}

/// Union `plines` into pairwise-disjoint shapes. Also returns the holes those
/// unions enclose.
///
/// Each shape is checked against the disjoint set built so far; on overlap the two
/// are replaced by their union, which goes back on the queue since it may now
/// reach shapes it missed before.
fn merge_overlapping(plines: Vec<Polyline<f64>>) -> (Vec<Polyline<f64>>, Vec<Polyline<f64>>) {
    let mut disjoint: Vec<Polyline<f64>> = Vec::with_capacity(plines.len());
    let mut holes = Vec::new();
    let mut queue = plines;

    while let Some(shape) = queue.pop() {
        let overlap = disjoint.iter().enumerate().find_map(|(k, other)| {
            let res = shape.boolean(other, BooleanOp::Or);
            match res.result_info {
                BooleanResultInfo::Disjoint | BooleanResultInfo::InvalidInput => None,
                _ => Some((k, res)),
            }
        });
        let Some((k, union)) = overlap else {
            disjoint.push(shape);
            continue;
        };
        disjoint.swap_remove(k);
        holes.extend(union.neg_plines.into_iter().map(|p| simplify(p.pline)));
        queue.extend(union.pos_plines.into_iter().map(|p| simplify(p.pline)));
    }

    (disjoint, holes)
}

fn orient(plines: Vec<Polyline<f64>>, desired: PlineOrientation) -> Vec<Polyline<f64>> {
    plines
        .into_iter()
        .map(|mut pl| {
            let orientation = pl.orientation();
            if orientation != PlineOrientation::Open && orientation != desired {
                pl.invert_direction_mut();
            }
            pl
        })
        .collect()
}

fn simplify(p: Polyline<f64>) -> Polyline<f64> {
    // Boolean results often carry collinear runs; drop the redundant vertices.
    p.remove_redundant(REDUNDANT_VERTEX_EPS).unwrap_or(p)
}
