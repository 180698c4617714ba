//! `polyclip clip`: one-shot intersection of two polygon sets read from a file.

use polyclip_core::{Point, Polygon};
use polyclip_editor::ClipOrchestrator;
use polyclip_geometry::{CavalierOracle, DEFAULT_OUTER_INDEX};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClipInput {
    pub primary: Vec<Vec<[f64; 2]>>,
    pub clip: Vec<Vec<[f64; 2]>>,
}

#[derive(Debug, Serialize)]
pub struct ClipOutput {
    pub results: Vec<Vec<[f64; 2]>>,
}

pub fn run(input: &ClipInput) -> Result<ClipOutput, CliError> {
    let orchestrator = ClipOrchestrator::new(CavalierOracle::default(), DEFAULT_OUTER_INDEX);
    let results = orchestrator
        .recompute(&polygons(&input.primary), &polygons(&input.clip))
        .map_err(|err| CliError::processing(err.to_string()))?;
    Ok(ClipOutput {
        results: results
            .iter()
            .map(|p| p.points().iter().map(|pt| pt.to_array()).collect())
            .collect(),
    })
}

fn polygons(raw: &[Vec<[f64; 2]>]) -> Vec<Polygon> {
    raw.iter()
        .map(|pts| pts.iter().copied().map(Point::from).collect())
        .collect()
}
