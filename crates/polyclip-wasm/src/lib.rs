use polyclip_core::{Point, Polygon};
use polyclip_editor::ClipOrchestrator;
use polyclip_geometry::{CavalierOracle, ClipError, DEFAULT_OUTER_INDEX};
use serde::Serialize;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;

/// Returns the current crate version. Used as a minimal wasm smoke export.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[derive(Serialize)]
struct PolyclipError {
    kind: String,
    message: String,
}

fn to_js_error(kind: &str, message: String) -> JsValue {
    let err = PolyclipError {
        kind: kind.to_string(),
        message,
    };
    serde_wasm_bindgen::to_value(&err)
        .unwrap_or_else(|_| JsValue::from_str(&format!("{kind}: {}", err.message)))
}

/// Intersect `primary` with `clip`. Both are arrays of polygons, each an array
/// of `{x, y}` points; the result has the same shape.
#[wasm_bindgen]
pub fn clip(clip: JsValue, primary: JsValue) -> Result<JsValue, JsValue> {
    let clip: Vec<Polygon> = serde_wasm_bindgen::from_value(clip)
        .map_err(|e| to_js_error("input", format!("clip set: {e}")))?;
    let primary: Vec<Polygon> = serde_wasm_bindgen::from_value(primary)
        .map_err(|e| to_js_error("input", format!("primary set: {e}")))?;

    let out = clip_sets(&clip, &primary).map_err(|e| to_js_error("clip", e.to_string()))?;
    serde_wasm_bindgen::to_value(&out).map_err(|e| to_js_error("wasm", e.to_string()))
}

/// The platform-independent half of [`clip`].
pub fn clip_sets(clip: &[Polygon], primary: &[Polygon]) -> Result<Vec<Vec<Point>>, ClipError> {
    let orchestrator = ClipOrchestrator::new(CavalierOracle::default(), DEFAULT_OUTER_INDEX);
    Ok(orchestrator
        .recompute(primary, clip)?
        .into_iter()
        .map(Polygon::into_points)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn square(x0: f64, y0: f64, side: f64) -> Polygon {
        [(x0, y0), (x0 + side, y0), (x0 + side, y0 + side), (x0, y0 + side)]
            .into_iter()
            .map(Point::from)
            .collect()
    }

    #[test]
    fn version_matches_manifest() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn clip_sets_intersects_overlapping_squares() {
        let out = clip_sets(&[square(5.0, 5.0, 10.0)], &[square(0.0, 0.0, 10.0)]).unwrap();
        assert_eq!(out.len(), 1);
        let min_x = out[0].iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let max_y = out[0].iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        assert_abs_diff_eq!(min_x, 5.0, epsilon = 1e-9);
        assert_abs_diff_eq!(max_y, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn clip_sets_surfaces_engine_rejections() {
        let sliver: Polygon = [(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]
            .into_iter()
            .map(Point::from)
            .collect();
        let err = clip_sets(&[sliver], &[square(0.0, 0.0, 4.0)]).unwrap_err();
        assert!(matches!(err, ClipError::Degenerate { .. }));
    }
}
