//! The clip oracle boundary: a pure function from two polygon sets to their
//! intersection, plus the cavalier-backed implementation.

use cavalier_contours::polyline::PlineSource;
use polyclip_core::{Role, MIN_POLYGON_VERTICES};
use tracing::debug;

use crate::primitives::{polygon, vertices};
use crate::region::Region;

/// Point representation exchanged with a clip oracle: `[x, y]` pairs in order.
pub type PointList = Vec<[f64; 2]>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClipError {
    #[error("{role} polygon {index} has a non-finite coordinate")]
    NonFinite { role: Role, index: usize },

    #[error("{role} polygon {index} has {len} vertices, at least 3 are required")]
    TooFewVertices { role: Role, index: usize, len: usize },

    #[error("{role} polygon {index} encloses no area")]
    Degenerate { role: Role, index: usize },

    #[error("clip engine rejected its input")]
    InvalidInput,

    #[error("clip engine failure: {0}")]
    Internal(String),
}

/// Computes the intersection of a clip set and a primary set.
///
/// Implementations must be free of side effects. An empty intersection is
/// `Ok(vec![])`, never an error.
pub trait ClipOracle {
    fn clip(&self, clip: &[PointList], primary: &[PointList]) -> Result<Vec<PointList>, ClipError>;
}

impl<T: ClipOracle + ?Sized> ClipOracle for &T {
    fn clip(&self, clip: &[PointList], primary: &[PointList]) -> Result<Vec<PointList>, ClipError> {
        (**self).clip(clip, primary)
    }
}

impl<T: ClipOracle + ?Sized> ClipOracle for Box<T> {
    fn clip(&self, clip: &[PointList], primary: &[PointList]) -> Result<Vec<PointList>, ClipError> {
        (**self).clip(clip, primary)
    }
}

/// Clip oracle built on cavalier_contours boolean operations.
///
/// Each set is unioned into a region (every polygon counts as filled, whatever its
/// winding) and the two regions are intersected. Outer boundaries come first in
/// the output, holes after them.
#[derive(Debug, Clone, Copy)]
pub struct CavalierOracle {
    /// Polygons whose absolute area is at or below this are rejected as degenerate.
    pub min_area: f64,
}

impl Default for CavalierOracle {
    fn default() -> Self {
        Self { min_area: 1e-9 }
    }
}

impl CavalierOracle {
    fn region(&self, role: Role, set: &[PointList]) -> Result<Region, ClipError> {
        let mut plines = Vec::with_capacity(set.len());
        for (index, pts) in set.iter().enumerate() {
            if pts.iter().flatten().any(|c| !c.is_finite()) {
                return Err(ClipError::NonFinite { role, index });
            }
            if pts.len() < MIN_POLYGON_VERTICES {
                return Err(ClipError::TooFewVertices {
                    role,
                    index,
                    len: pts.len(),
                });
            }
            let pl = polygon(pts);
            if pl.area().abs() <= self.min_area {
                return Err(ClipError::Degenerate { role, index });
            }
            plines.push(pl);
        }
        Ok(Region::union_all(plines))
    }
}

impl ClipOracle for CavalierOracle {
    fn clip(&self, clip: &[PointList], primary: &[PointList]) -> Result<Vec<PointList>, ClipError> {
        let clip_region = self.region(Role::Clip, clip)?;
        let primary_region = self.region(Role::Primary, primary)?;
        if clip_region.is_empty() || primary_region.is_empty() {
            return Ok(Vec::new());
        }

        let out = clip_region
            .intersect(&primary_region)
            .map_err(|_| ClipError::InvalidInput)?;
        debug!(
            boundaries = out.pos.len(),
            holes = out.neg.len(),
            "clip intersection computed"
        );
        Ok(out.boundaries().map(vertices).collect())
    }
}
