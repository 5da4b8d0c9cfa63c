use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Collaborator-side knobs. Engine constants (weights, thresholds,
/// multiplier tables) are fixed in code and deliberately not configurable.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum matches returned by `regiq match` (default: 5)
    #[serde(default)]
    pub limit: Option<usize>,

    /// Minimum match score kept in discovery mode (default: 0.3)
    #[serde(default)]
    pub match_floor: Option<f64>,

    /// Optional YAML file with regions and entities to load instead of the
    /// built-in sample registry
    #[serde(default)]
    pub data: Option<PathBuf>,
}
