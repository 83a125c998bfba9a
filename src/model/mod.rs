//! Value records for one analysis: criteria, variants, and score results.
//!
//! Criteria and variants are plain ordered collections owned by a
//! [`Session`](crate::session::Session); `ScoreResult` is an ephemeral
//! projection recomputed on every run and never persisted.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A named evaluation dimension with a relative importance weight.
///
/// Names are unique within one analysis; weights are non-negative.
/// Both invariants are enforced by the session layer, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    pub weight: f64,
}

impl Criterion {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// An alternative option being evaluated against all criteria.
///
/// `ratings` maps criterion name to a rating in the configured range
/// (0..=10 by default). Missing entries are filled with the default
/// rating at scoring time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub name: String,
    #[serde(default)]
    pub ratings: HashMap<String, f64>,
}

impl Variant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ratings: HashMap::new(),
        }
    }

    /// Set the rating for one criterion, replacing any previous value.
    pub fn rate(mut self, criterion: impl Into<String>, rating: f64) -> Self {
        self.ratings.insert(criterion.into(), rating);
        self
    }
}

/// Scoring outcome for one variant: per-criterion weighted scores plus
/// their sum (the total utility used for ranking).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub variant_name: String,
    pub weighted_scores: HashMap<String, f64>,
    pub total_utility: f64,
}

/// A complete scoring request: the input shape accepted by
/// `nutzwert score` as JSON (file or stdin).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Analysis {
    #[serde(default)]
    pub criteria: Vec<Criterion>,
    #[serde(default)]
    pub variants: Vec<Variant>,
}
