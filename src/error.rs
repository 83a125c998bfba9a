//! Error taxonomy for session mutation and I/O.
//!
//! Degenerate scoring inputs (all-zero weights, missing ratings, empty
//! criteria sets) are defined outcomes of the engine, not errors, and
//! never appear here.

use thiserror::Error;

/// Errors raised by session mutation and by config/analysis file I/O.
#[derive(Debug, Error)]
pub enum NutzwertError {
    #[error("criterion '{0}' already exists")]
    DuplicateCriterion(String),

    #[error("criterion name must not be empty")]
    EmptyCriterionName,

    #[error("variant name must not be empty")]
    EmptyVariantName,

    #[error("no criterion named '{0}'")]
    UnknownCriterion(String),

    #[error("index {0} is out of range")]
    IndexOutOfRange(usize),

    #[error("weight {value} outside allowed range 0..={max}")]
    WeightOutOfRange { value: f64, max: f64 },

    #[error("rating {value} outside allowed range 0..={max}")]
    RatingOutOfRange { value: f64, max: f64 },

    #[error("variant count must be between 1 and {max}")]
    VariantLimit { max: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Library-wide result alias.
pub type Result<T> = std::result::Result<T, NutzwertError>;
