//! Geometry primitives shared by the polyclip crates: points, polygons, and the
//! winding-order test used before clipping.

mod point;

pub use point::Point;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum vertex count for a polygon to be committed or clipped.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Which collection a committed polygon belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Primary,
    Clip,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Primary => f.write_str("primary"),
            Role::Clip => f.write_str("clip"),
        }
    }
}

/// Traversal direction of a polygon in screen coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

/// An ordered, implicitly closed sequence of points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the polygon has enough vertices to enclose an area.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.points.len() >= MIN_POLYGON_VERTICES
    }

    /// The same vertices in the opposite order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.points.iter().rev().copied().collect())
    }

    /// Shift every vertex by `(dx, dy)`. Vertex count and shape are unchanged.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        for p in &mut self.points {
            *p = p.translated(dx, dy);
        }
    }

    /// `Σ (x_{i+1} − x_i)(y_{i+1} + y_i)` over every edge, including last → first.
    ///
    /// Positive and negative terms are summed separately in sorted order, so the
    /// result does not depend on the starting vertex and negates exactly when the
    /// vertex order is reversed.
    #[must_use]
    pub fn winding_sum(&self) -> f64 {
        winding_sum(&self.points)
    }

    #[must_use]
    pub fn winding(&self) -> Winding {
        if self.winding_sum() < 0.0 {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }

    #[must_use]
    pub fn is_clockwise(&self) -> bool {
        self.winding() == Winding::Clockwise
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn winding_sum(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }

    let mut pos = Vec::with_capacity(n);
    let mut neg = Vec::with_capacity(n);
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % n];
        let term = (b.x - a.x) * (b.y + a.y);
        if term > 0.0 {
            pos.push(term);
        } else if term < 0.0 {
            neg.push(-term);
        } else if term.is_nan() {
            return f64::NAN;
        }
    }

    pos.sort_by(f64::total_cmp);
    neg.sort_by(f64::total_cmp);
    pos.iter().sum::<f64>() - neg.iter().sum::<f64>()
}
