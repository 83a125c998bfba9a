//! Scoring engine: weight normalization and weighted-score aggregation.
//!
//! Both functions are pure and stateless; one call per analysis run.
//! Degenerate inputs (all-zero weights, empty criteria, missing ratings)
//! are defined outcomes, never errors.

use std::collections::HashMap;

use crate::model::{Criterion, ScoreResult, Variant};

/// Rating substituted when a variant has no entry for a criterion.
/// Midpoint of the 0..=10 rating range.
pub const DEFAULT_RATING: f64 = 5.0;

/// Rescale weights to percentages summing to 100, preserving proportions.
///
/// If the weights sum to zero (all zero, or empty input) the input is
/// returned unchanged. This pass-through is deliberate policy: an
/// all-zero weight set means "nothing matters yet", not a caller bug.
/// Negative weights are not rejected here; range checks belong to the
/// collecting layer.
pub fn normalize_weights(weights: &[f64]) -> Vec<f64> {
    let total: f64 = weights.iter().sum();
    if total > 0.0 {
        weights.iter().map(|w| w / total * 100.0).collect()
    } else {
        weights.to_vec()
    }
}

/// Score every variant against the criteria and rank by total utility.
///
/// For each variant, each criterion contributes
/// `rating * normalized_weight / 100`; the total utility is the sum of
/// those contributions. Results come back sorted by total utility
/// descending; ties keep their input order (stable sort). With an empty
/// criteria set every total utility is 0.
///
/// Inputs are never mutated; a fresh result vector is returned per call.
pub fn compute_scores(criteria: &[Criterion], variants: &[Variant]) -> Vec<ScoreResult> {
    let raw_weights: Vec<f64> = criteria.iter().map(|c| c.weight).collect();
    let normalized = normalize_weights(&raw_weights);

    let mut results: Vec<ScoreResult> = variants
        .iter()
        .map(|variant| {
            let mut weighted_scores = HashMap::with_capacity(criteria.len());
            let mut total_utility = 0.0;

            for (criterion, weight) in criteria.iter().zip(&normalized) {
                let rating = variant
                    .ratings
                    .get(&criterion.name)
                    .copied()
                    .unwrap_or(DEFAULT_RATING);
                let weighted = rating * weight / 100.0;
                weighted_scores.insert(criterion.name.clone(), weighted);
                total_utility += weighted;
            }

            ScoreResult {
                variant_name: variant.name.clone(),
                weighted_scores,
                total_utility,
            }
        })
        .collect();

    // Vec::sort_by is stable, so equal utilities keep input order.
    results.sort_by(|a, b| {
        b.total_utility
            .partial_cmp(&a.total_utility)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    results
}
