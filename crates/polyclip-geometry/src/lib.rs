//! Polygon-set geometry for polyclip: winding normalization and the clip oracle.

pub mod oracle;
pub mod orientation;
pub mod primitives;
pub mod region;

pub use oracle::{CavalierOracle, ClipError, ClipOracle, PointList};
pub use orientation::{normalize, DEFAULT_OUTER_INDEX};
