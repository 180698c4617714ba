//! `polyclip replay`: drive a scene from a scripted list of raw input events.

use std::time::Duration;

use polyclip_core::{Point, Polygon};
use polyclip_editor::{
    EditorConfig, InputAdapter, ManualClock, Mode, RawEvent, Scene, SceneEvent,
};
use polyclip_geometry::CavalierOracle;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info};

use crate::error::CliError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    #[serde(default)]
    pub config: Option<EditorConfig>,
    pub events: Vec<Step>,
}

/// One script entry: either a pause or an input event.
#[derive(Debug)]
pub enum Step {
    /// Advance the session clock by this many milliseconds.
    Wait { wait: u64 },
    Input(RawEvent),
}

impl<'de> Deserialize<'de> for Step {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Buffered so YAML and JSON scripts both accept events in `name: {..}` map form.
        let value = serde_json::Value::deserialize(deserializer)?;
        if let Some(wait) = value.get("wait") {
            return wait.as_u64().map(|wait| Step::Wait { wait }).ok_or_else(|| {
                D::Error::custom(format!("wait must be whole milliseconds, got {wait}"))
            });
        }
        serde_json::from_value(value)
            .map(Step::Input)
            .map_err(D::Error::custom)
    }
}

/// Final state of a replayed session.
#[derive(Debug, Serialize)]
pub struct Snapshot {
    pub mode: Mode,
    pub primary: Vec<Polygon>,
    pub clip: Vec<Polygon>,
    pub clip_results: Vec<Polygon>,
    pub in_progress: Vec<Point>,
    pub cursor: Point,
    pub clip_failures: Vec<String>,
}

/// Replay `script` against a fresh scene. A `config` overrides the script's own.
pub fn run(script: Script, config: Option<EditorConfig>) -> Result<Snapshot, CliError> {
    let config = config.or(script.config).unwrap_or_default();
    let clock = ManualClock::new();
    let mut scene = Scene::with_clock(CavalierOracle::default(), &config, clock.clone());
    let mut adapter = InputAdapter::new();
    let mut failures = Vec::new();

    adapter.attach();
    for (i, step) in script.events.iter().enumerate() {
        match step {
            Step::Wait { wait } => {
                clock.advance(Duration::from_millis(*wait));
                if scene.tick() {
                    debug!(step = i, "deferred recompute ran");
                }
            }
            Step::Input(event) => adapter
                .dispatch(&mut scene, event)
                .map_err(|err| CliError::processing(format!("step {i}: {err}")))?,
        }
        collect_failures(&mut scene, &mut failures);
    }
    adapter.detach();

    // Let a trailing drag recompute land before taking the snapshot.
    clock.advance(config.drag_throttle());
    scene.tick();
    collect_failures(&mut scene, &mut failures);

    info!(
        primary = scene.primary().len(),
        clip = scene.clip().len(),
        results = scene.clip_results().len(),
        "replay finished"
    );
    Ok(Snapshot {
        mode: scene.mode(),
        primary: scene.primary().to_vec(),
        clip: scene.clip().to_vec(),
        clip_results: scene.clip_results().to_vec(),
        in_progress: scene.in_progress().to_vec(),
        cursor: scene.cursor(),
        clip_failures: failures,
    })
}

fn collect_failures(scene: &mut Scene, failures: &mut Vec<String>) {
    failures.extend(scene.drain_events().into_iter().map(|event| match event {
        SceneEvent::ClipFailed { message } => message,
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(raw: &str) -> Script {
        serde_yaml::from_str(raw).unwrap()
    }

    #[test]
    fn waits_and_events_parse_side_by_side() {
        let s = script(
            r#"
config: { drag_throttle_ms: 40 }
events:
  - wait: 20
  - toolbar: move
  - key_down: Escape
"#,
        );
        assert_eq!(s.config.unwrap().drag_throttle_ms, 40);
        assert!(matches!(s.events[0], Step::Wait { wait: 20 }));
        assert!(matches!(s.events[1], Step::Input(RawEvent::Toolbar(_))));
    }

    #[test]
    fn malformed_event_reports_the_missing_field() {
        let err = serde_yaml::from_str::<Script>("events:\n  - pointer_move: { x: 1 }\n").unwrap_err();
        assert!(err.to_string().contains("missing field `y`"), "{err}");

        let err = serde_yaml::from_str::<Script>("events:\n  - wait: soon\n").unwrap_err();
        assert!(err.to_string().contains("wait must be whole milliseconds"), "{err}");
    }

    #[test]
    fn json_scripts_use_the_same_shape() {
        let s: Script = serde_json::from_str(
            r#"{"events": [{"wait": 5}, {"toolbar": "clear"}, {"key_down": "Escape"}]}"#,
        )
        .unwrap();
        assert!(matches!(s.events[0], Step::Wait { wait: 5 }));
        assert!(matches!(s.events[2], Step::Input(RawEvent::KeyDown(_))));
    }

    #[test]
    fn trailing_drag_recompute_lands_before_snapshot() {
        let s = script(
            r#"
events:
  - pointer_down: { button: primary, x: 0, y: 0 }
  - pointer_down: { button: primary, x: 10, y: 0 }
  - pointer_down: { button: primary, x: 10, y: 10 }
  - pointer_down: { button: secondary, x: 0, y: 10 }
  - toolbar: plot_clip
  - pointer_down: { button: primary, x: 20, y: 0 }
  - pointer_down: { button: primary, x: 30, y: 0 }
  - pointer_down: { button: primary, x: 30, y: 10 }
  - pointer_down: { button: secondary, x: 20, y: 10 }
  - toolbar: move
  - drag_move: { target: 1, x: -5, y: 0 }
  - drag_move: { target: 1, x: -15, y: 0 }
"#,
        );
        let snap = run(s, None).unwrap();
        assert_eq!(snap.mode, Mode::Move);
        assert_eq!(snap.clip[0].points()[0], Point::new(5.0, 0.0));
        assert_eq!(snap.clip_results.len(), 1);
        assert!(snap.clip_failures.is_empty());
    }

    #[test]
    fn rejected_command_reports_its_step() {
        let s = script("events:\n  - drag_end: { target: 3, x: 1, y: 1 }\n");
        let err = run(s, None).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::Processing);
        assert!(err.message.starts_with("step 0:"));
    }
}
