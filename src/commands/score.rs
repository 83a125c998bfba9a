//! Non-interactive scoring command.
//!
//! Reads a complete analysis (criteria plus variants) as JSON from a
//! file or stdin and prints the ranked results as a table or JSON.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use console::style;

use crate::commands::output::render_table;
use crate::config::Config;
use crate::model::Analysis;
use crate::scoring::compute_scores;

/// Options for the score command
#[derive(Debug, Clone, Default)]
pub struct ScoreOptions {
    /// Analysis JSON file (stdin if not provided)
    pub input: Option<PathBuf>,
    /// Output as JSON
    pub json: bool,
}

/// Execute the score command
pub fn execute_score(options: ScoreOptions, config: Config) -> Result<()> {
    let content = match &options.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let analysis: Analysis = serde_json::from_str(&content).context("invalid analysis JSON")?;
    validate_analysis(&analysis, &config)?;

    let results = compute_scores(&analysis.criteria, &analysis.variants);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        println!("{}", style("Utility value analysis results").bold());
        println!("{}", render_table(&analysis.criteria, &results));
    }

    Ok(())
}

/// Basic numeric range checks on file input, standing in for the range
/// enforcement the interactive prompts provide.
///
/// Weights above the interactive maximum are allowed here (normalization
/// makes them meaningful); negatives are not. Ratings must stay in range.
fn validate_analysis(analysis: &Analysis, config: &Config) -> Result<()> {
    let mut seen = std::collections::HashSet::new();
    for criterion in &analysis.criteria {
        if criterion.name.trim().is_empty() {
            bail!("criterion name must not be empty");
        }
        if !seen.insert(criterion.name.as_str()) {
            bail!("duplicate criterion '{}'", criterion.name);
        }
        if criterion.weight < 0.0 {
            bail!(
                "criterion '{}' has negative weight {}",
                criterion.name,
                criterion.weight
            );
        }
        if criterion.weight > config.weight_max {
            tracing::warn!(
                "criterion '{}' weight {} exceeds the interactive maximum {}",
                criterion.name,
                criterion.weight,
                config.weight_max
            );
        }
    }

    if analysis.variants.is_empty() {
        bail!("analysis has no variants");
    }
    if analysis.variants.len() > config.max_variants {
        bail!(
            "analysis has {} variants; at most {} are supported",
            analysis.variants.len(),
            config.max_variants
        );
    }
    for variant in &analysis.variants {
        for (criterion, rating) in &variant.ratings {
            if !(0.0..=config.rating_max).contains(rating) {
                bail!(
                    "variant '{}' rating {} for '{}' outside 0..={}",
                    variant.name,
                    rating,
                    criterion,
                    config.rating_max
                );
            }
        }
    }

    Ok(())
}
