use polyclip_core::{Point, Polygon};
use polyclip_geometry::{normalize, ClipError, ClipOracle, PointList};
use tracing::debug;

/// Prepares polygon sets for a [`ClipOracle`] and converts its answer back.
#[derive(Debug, Clone)]
pub struct ClipOrchestrator<O> {
    oracle: O,
    outer_index: usize,
}

impl<O: ClipOracle> ClipOrchestrator<O> {
    pub fn new(oracle: O, outer_index: usize) -> Self {
        Self {
            oracle,
            outer_index,
        }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Intersect `primary` with `clip`.
    ///
    /// Returns an empty result without consulting the oracle when either set is
    /// empty. Otherwise both sets are winding-normalized independently and passed
    /// to the oracle clip set first.
    pub fn recompute(&self, primary: &[Polygon], clip: &[Polygon]) -> Result<Vec<Polygon>, ClipError> {
        if primary.is_empty() || clip.is_empty() {
            return Ok(Vec::new());
        }

        let primary = to_point_lists(&normalize(primary, self.outer_index));
        let clip = to_point_lists(&normalize(clip, self.outer_index));
        debug!(primary = primary.len(), clip = clip.len(), "invoking clip oracle");

        let out = self.oracle.clip(&clip, &primary)?;
        Ok(out.into_iter().map(from_point_list).collect())
    }
}

fn to_point_lists(polygons: &[Polygon]) -> Vec<PointList> {
    polygons
        .iter()
        .map(|p| p.points().iter().map(|pt| pt.to_array()).collect())
        .collect()
}

fn from_point_list(pts: PointList) -> Polygon {
    pts.into_iter().map(Point::from).collect()
}

/// Position of a recompute in trigger order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Hands out tickets and remembers the newest one whose result was applied, so a
/// slow earlier recompute cannot overwrite a later one.
#[derive(Debug, Clone, Default)]
pub struct Sequencer {
    issued: u64,
    applied: Option<Ticket>,
}

impl Sequencer {
    pub fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Record `ticket` as applied unless a newer one already was.
    pub fn accept(&mut self, ticket: Ticket) -> bool {
        if self.applied.is_some_and(|applied| ticket <= applied) {
            return false;
        }
        self.applied = Some(ticket);
        true
    }
}

/// What happened to a finished recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Failed,
    /// A later recompute had already been applied; this outcome was dropped.
    Stale,
}
