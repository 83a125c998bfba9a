//! Normalize command: print weights rescaled to percentages.

use anyhow::{bail, Result};

use crate::scoring::normalize_weights;

/// Options for the normalize command
#[derive(Debug, Clone, Default)]
pub struct NormalizeOptions {
    /// Raw weights to normalize
    pub weights: Vec<f64>,
    /// Output as JSON
    pub json: bool,
}

/// Execute the normalize command
pub fn execute_normalize(options: NormalizeOptions) -> Result<()> {
    for weight in &options.weights {
        if *weight < 0.0 {
            bail!("weights must be non-negative, got {}", weight);
        }
    }

    let normalized = normalize_weights(&options.weights);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&normalized)?);
    } else {
        for (raw, norm) in options.weights.iter().zip(&normalized) {
            println!("{:>8.2} -> {:>7.2}%", raw, norm);
        }
    }

    Ok(())
}
