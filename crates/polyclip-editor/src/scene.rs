use polyclip_core::{Point, Polygon, Role};
use polyclip_geometry::{CavalierOracle, ClipError, ClipOracle};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::config::EditorConfig;
use crate::error::EditorError;
use crate::orchestrator::{ClipOrchestrator, Completion, Sequencer, Ticket};
use crate::path::PathTracker;
use crate::store::PolygonStore;
use crate::throttle::{Clock, MonotonicClock, Throttle};

/// How pointer input is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    DrawPrimary,
    DrawClip,
    Move,
}

impl Mode {
    /// Collection new polygons go to, or `None` while moving.
    pub fn role(self) -> Option<Role> {
        match self {
            Mode::DrawPrimary => Some(Role::Primary),
            Mode::DrawClip => Some(Role::Clip),
            Mode::Move => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    SetMode(Mode),
    AddVertex(Point),
    CommitPath,
    CancelPath,
    MovePolygon {
        index: usize,
        dx: f64,
        dy: f64,
        is_final: bool,
    },
    ClearAll,
    UpdateCursor(Point),
    Recompute,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneEvent {
    ClipFailed { message: String },
}

/// Snapshot of both polygon sets taken for a recompute that runs elsewhere.
#[derive(Debug, Clone)]
pub struct RecomputeRequest {
    pub ticket: Ticket,
    pub primary: Vec<Polygon>,
    pub clip: Vec<Polygon>,
}

/// The editing session: mode, in-progress path, committed polygons and the clip
/// result derived from them.
pub struct Scene<O = CavalierOracle> {
    mode: Mode,
    path: PathTracker,
    store: PolygonStore,
    orchestrator: ClipOrchestrator<O>,
    sequencer: Sequencer,
    throttle: Throttle,
    clock: Box<dyn Clock>,
    events: Vec<SceneEvent>,
}

impl Scene<CavalierOracle> {
    pub fn new(config: &EditorConfig) -> Self {
        Self::with_oracle(CavalierOracle::default(), config)
    }
}

impl Default for Scene<CavalierOracle> {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl<O: ClipOracle> Scene<O> {
    pub fn with_oracle(oracle: O, config: &EditorConfig) -> Self {
        Self::with_clock(oracle, config, MonotonicClock::new())
    }

    pub fn with_clock(oracle: O, config: &EditorConfig, clock: impl Clock + 'static) -> Self {
        Self {
            mode: Mode::default(),
            path: PathTracker::new(),
            store: PolygonStore::new(),
            orchestrator: ClipOrchestrator::new(oracle, config.outer_index),
            sequencer: Sequencer::default(),
            throttle: Throttle::new(config.drag_throttle()),
            clock: Box::new(clock),
            events: Vec::new(),
        }
    }

    pub fn apply(&mut self, command: Command) -> Result<(), EditorError> {
        debug!(?command, mode = ?self.mode, "apply");
        match command {
            Command::SetMode(mode) => self.set_mode(mode),
            Command::AddVertex(p) => self.add_vertex(p),
            Command::CommitPath => self.commit_path(),
            Command::CancelPath => self.cancel_path(),
            Command::MovePolygon {
                index,
                dx,
                dy,
                is_final,
            } => return self.move_polygon(index, dx, dy, is_final),
            Command::ClearAll => self.clear_all(),
            Command::UpdateCursor(p) => self.update_cursor(p),
            Command::Recompute => self.recompute(),
        }
        Ok(())
    }

    /// Switch modes. Entering [`Mode::Move`] drops the in-progress path and
    /// recomputes once.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        if mode == Mode::Move {
            if !self.path.in_progress().is_empty() {
                debug!(
                    vertices = self.path.in_progress().len(),
                    "discarding in-progress path"
                );
            }
            self.path.cancel_path();
            self.recompute();
        }
    }

    pub fn add_vertex(&mut self, p: Point) {
        if self.mode.role().is_none() {
            trace!("vertex ignored while moving");
            return;
        }
        self.path.add_vertex(p);
    }

    /// Close the in-progress path at the cursor into the active collection.
    /// Paths with fewer than three vertices are dropped.
    pub fn commit_path(&mut self) {
        let Some(role) = self.mode.role() else {
            return;
        };
        let polygon = self.path.commit_path();
        let vertices = polygon.len();
        if !self.store.push(role, polygon) {
            debug!(vertices, "discarding incomplete path");
            return;
        }
        debug!(%role, vertices, "committed polygon");
        self.recompute();
    }

    pub fn cancel_path(&mut self) {
        self.path.cancel_path();
    }

    pub fn update_cursor(&mut self, p: Point) {
        self.path.update_cursor(p);
    }

    /// Translate the polygon at flattened index `index` by `(dx, dy)`.
    ///
    /// Intermediate moves recompute through the drag throttle; the final move of a
    /// gesture always recomputes.
    pub fn move_polygon(
        &mut self,
        index: usize,
        dx: f64,
        dy: f64,
        is_final: bool,
    ) -> Result<(), EditorError> {
        let len = self.store.draggable_len();
        let (role, i) = self
            .store
            .resolve_drag_target(index)
            .ok_or(EditorError::DragTargetOutOfRange { index, len })?;
        if let Some(polygon) = self.store.polygon_mut(role, i) {
            polygon.translate(dx, dy);
        }

        let now = self.clock.now();
        if is_final || self.throttle.request(now) {
            self.run_recompute();
            self.throttle.record_run(now);
        } else {
            trace!(index, "drag recompute deferred");
        }
        Ok(())
    }

    pub fn clear_all(&mut self) {
        self.store.clear();
        self.path.cancel_path();
        self.throttle.reset();
        self.recompute();
    }

    /// Recompute immediately, superseding any deferred drag recompute.
    pub fn recompute(&mut self) {
        self.run_recompute();
        self.throttle.clear_pending();
    }

    /// Run a deferred drag recompute if its interval has elapsed. Hosts call this
    /// from their event loop.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        if !self.throttle.poll(now) {
            return false;
        }
        self.run_recompute();
        self.throttle.record_run(now);
        true
    }

    /// Issue a ticket and snapshot both sets for a recompute that the host runs
    /// itself, possibly off the event loop. Finish with
    /// [`Scene::complete_recompute`].
    pub fn begin_recompute(&mut self) -> RecomputeRequest {
        RecomputeRequest {
            ticket: self.sequencer.issue(),
            primary: self.store.primary().to_vec(),
            clip: self.store.clip().to_vec(),
        }
    }

    /// Apply the outcome of a recompute unless a later one was applied first.
    pub fn complete_recompute(
        &mut self,
        ticket: Ticket,
        outcome: Result<Vec<Polygon>, ClipError>,
    ) -> Completion {
        if !self.sequencer.accept(ticket) {
            debug!(?ticket, "dropping stale clip result");
            return Completion::Stale;
        }
        match outcome {
            Ok(results) => {
                debug!(results = results.len(), "clip results updated");
                self.store.set_clip_results(results);
                Completion::Applied
            }
            Err(err) => {
                warn!(error = %err, "clip failed");
                self.store.clear_clip_results();
                self.events.push(SceneEvent::ClipFailed {
                    message: err.to_string(),
                });
                Completion::Failed
            }
        }
    }

    fn run_recompute(&mut self) -> Completion {
        let ticket = self.sequencer.issue();
        let outcome = self
            .orchestrator
            .recompute(self.store.primary(), self.store.clip());
        self.complete_recompute(ticket, outcome)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn primary(&self) -> &[Polygon] {
        self.store.primary()
    }

    pub fn clip(&self) -> &[Polygon] {
        self.store.clip()
    }

    pub fn clip_results(&self) -> &[Polygon] {
        self.store.clip_results()
    }

    pub fn in_progress(&self) -> &[Point] {
        self.path.in_progress()
    }

    pub fn cursor(&self) -> Point {
        self.path.cursor()
    }

    pub fn preview(&self) -> Vec<Point> {
        self.path.preview()
    }

    pub fn has_pending_recompute(&self) -> bool {
        self.throttle.is_pending()
    }

    pub fn orchestrator(&self) -> &ClipOrchestrator<O> {
        &self.orchestrator
    }

    /// Take every notification raised since the last call.
    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.events)
    }
}
