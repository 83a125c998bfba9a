//! Tool configuration: predefined criteria, input ranges, and limits.
//!
//! Defaults are compiled in; an optional `.nutzwert.json` in the working
//! directory overrides them (see `--config`).

use serde::{Deserialize, Serialize};

fn default_predefined_criteria() -> Vec<String> {
    ["Cost", "Capacity", "Quality", "Reliability"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_weight_max() -> f64 {
    10.0
}

fn default_rating_max() -> f64 {
    10.0
}

fn default_default_rating() -> f64 {
    5.0
}

fn default_initial_weight() -> f64 {
    1.0
}

fn default_max_variants() -> usize {
    5
}

/// Main nutzwert configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Criteria offered as presets in interactive mode
    #[serde(default = "default_predefined_criteria")]
    pub predefined_criteria: Vec<String>,

    /// Upper bound for criterion weights (lower bound is always 0)
    #[serde(default = "default_weight_max")]
    pub weight_max: f64,

    /// Upper bound for variant ratings (lower bound is always 0)
    #[serde(default = "default_rating_max")]
    pub rating_max: f64,

    /// Rating pre-filled in interactive prompts
    #[serde(default = "default_default_rating")]
    pub default_rating: f64,

    /// Weight assigned to a freshly added criterion
    #[serde(default = "default_initial_weight")]
    pub initial_weight: f64,

    /// Maximum number of variants in one analysis
    #[serde(default = "default_max_variants")]
    pub max_variants: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            predefined_criteria: default_predefined_criteria(),
            weight_max: default_weight_max(),
            rating_max: default_rating_max(),
            default_rating: default_default_rating(),
            initial_weight: default_initial_weight(),
            max_variants: default_max_variants(),
        }
    }
}

impl Config {
    /// Load config from a .nutzwert.json file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to a file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
