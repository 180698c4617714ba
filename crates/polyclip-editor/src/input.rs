//! Translation of raw pointer, keyboard, drag and toolbar events into scene commands.

use polyclip_core::Point;
use polyclip_geometry::ClipOracle;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::EditorError;
use crate::scene::{Command, Mode, Scene};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolbarButton {
    Clip,
    Move,
    PlotPrimary,
    PlotClip,
    Clear,
    Help,
}

/// An input event as a canvas host reports it.
///
/// Drag coordinates are the dragged shape's offset from where the gesture
/// started, not a per-event delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawEvent {
    PointerDown { button: PointerButton, x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    KeyDown(String),
    DragMove { target: usize, x: f64, y: f64 },
    DragEnd { target: usize, x: f64, y: f64 },
    Toolbar(ToolbarButton),
}

#[derive(Debug, Clone, Copy)]
struct DragGesture {
    target: usize,
    offset: Point,
}

/// Turns [`RawEvent`]s into [`Command`]s while attached to a session.
///
/// A freshly created adapter is detached and ignores everything until
/// [`InputAdapter::attach`] is called.
#[derive(Debug, Default)]
pub struct InputAdapter {
    attached: bool,
    drag: Option<DragGesture>,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Stop translating events. An unfinished drag gesture is forgotten.
    pub fn detach(&mut self) {
        self.attached = false;
        self.drag = None;
    }

    pub fn translate(&mut self, event: &RawEvent) -> Vec<Command> {
        if !self.attached {
            trace!(?event, "adapter detached, event dropped");
            return Vec::new();
        }

        match *event {
            RawEvent::PointerDown { button, x, y } => {
                let p = Point::new(x, y);
                match button {
                    PointerButton::Primary => vec![Command::AddVertex(p)],
                    // The release position becomes the closing vertex.
                    PointerButton::Secondary => vec![Command::UpdateCursor(p), Command::CommitPath],
                    PointerButton::Middle => Vec::new(),
                }
            }
            RawEvent::PointerMove { x, y } => vec![Command::UpdateCursor(Point::new(x, y))],
            RawEvent::KeyDown(ref key) if key == "Escape" => vec![Command::CancelPath],
            RawEvent::KeyDown(_) => Vec::new(),
            RawEvent::DragMove { target, x, y } => vec![self.drag_step(target, x, y, false)],
            RawEvent::DragEnd { target, x, y } => vec![self.drag_step(target, x, y, true)],
            RawEvent::Toolbar(button) => match button {
                ToolbarButton::Clip => vec![Command::Recompute],
                ToolbarButton::Move => vec![Command::SetMode(Mode::Move)],
                ToolbarButton::PlotPrimary => vec![Command::SetMode(Mode::DrawPrimary)],
                ToolbarButton::PlotClip => vec![Command::SetMode(Mode::DrawClip)],
                ToolbarButton::Clear => vec![Command::ClearAll],
                ToolbarButton::Help => Vec::new(),
            },
        }
    }

    /// Translate `event` and apply the resulting commands to `scene` in order.
    pub fn dispatch<O: ClipOracle>(
        &mut self,
        scene: &mut Scene<O>,
        event: &RawEvent,
    ) -> Result<(), EditorError> {
        for command in self.translate(event) {
            scene.apply(command)?;
        }
        Ok(())
    }

    fn drag_step(&mut self, target: usize, x: f64, y: f64, is_final: bool) -> Command {
        let previous = match self.drag {
            Some(g) if g.target == target => g.offset,
            _ => Point::default(),
        };
        let offset = Point::new(x, y);
        self.drag = if is_final {
            None
        } else {
            Some(DragGesture { target, offset })
        };
        Command::MovePolygon {
            index: target,
            dx: offset.x - previous.x,
            dy: offset.y - previous.y,
            is_final,
        }
    }
}
