//! Interactive polygon editing state coupled to the clip pipeline.
//!
//! A [`Scene`] owns the drawing mode, the in-progress path, both committed
//! polygon sets and the clip result derived from them. It is mutated only through
//! [`Command`]s, either applied directly or produced from raw input by an
//! [`InputAdapter`]. Every mutation of the committed sets recomputes the clip
//! result through the injected [`ClipOracle`](polyclip_geometry::ClipOracle).

pub mod config;
pub mod error;
pub mod input;
pub mod orchestrator;
pub mod path;
pub mod scene;
pub mod store;
pub mod throttle;

pub use config::EditorConfig;
pub use error::{ConfigError, EditorError};
pub use input::{InputAdapter, PointerButton, RawEvent, ToolbarButton};
pub use orchestrator::{ClipOrchestrator, Completion, Ticket};
pub use path::PathTracker;
pub use scene::{Command, Mode, RecomputeRequest, Scene, SceneEvent};
pub use store::PolygonStore;
pub use throttle::{Clock, ManualClock, MonotonicClock, Throttle};

pub use polyclip_core::{Point, Polygon, Role};
