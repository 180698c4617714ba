use std::path::Path;
use std::time::Duration;

use polyclip_geometry::DEFAULT_OUTER_INDEX;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const DEFAULT_DRAG_THROTTLE_MS: u64 = 16;

/// Tunables for a [`Scene`](crate::Scene).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Minimum spacing between drag-move recomputes. `0` recomputes on every move.
    pub drag_throttle_ms: u64,
    /// Which polygon of each set decides the winding normalization.
    pub outer_index: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            drag_throttle_ms: DEFAULT_DRAG_THROTTLE_MS,
            outer_index: DEFAULT_OUTER_INDEX,
        }
    }
}

impl EditorConfig {
    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(raw)?)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load from disk. `.json` files are read as JSON, anything else as YAML.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&raw)
        } else {
            Self::from_yaml_str(&raw)
        }
    }

    pub fn drag_throttle(&self) -> Duration {
        Duration::from_millis(self.drag_throttle_ms)
    }
}
