#![forbid(unsafe_code)]

//! # Nutzwert
//!
//! Weighted-criteria decision scoring (utility value analysis) for
//! comparing alternatives such as "make" vs "buy".
//!
//! The core is a pure scoring engine: weights are normalized to
//! percentages, each variant's ratings are scaled by them, and variants
//! are ranked by total utility. Everything around it (prompts, tables,
//! config) is presentation plumbing.
//!
//! ## Example
//!
//! ```rust
//! use nutzwert::{compute_scores, Criterion, Variant};
//!
//! let criteria = vec![Criterion::new("Cost", 5.0), Criterion::new("Quality", 5.0)];
//! let variants = vec![
//!     Variant::new("Make").rate("Cost", 8.0).rate("Quality", 6.0),
//!     Variant::new("Buy").rate("Cost", 3.0).rate("Quality", 9.0),
//! ];
//!
//! let results = compute_scores(&criteria, &variants);
//! assert_eq!(results[0].variant_name, "Make");
//! assert_eq!(results[0].total_utility, 7.0);
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod scoring;
pub mod session;

// Re-exports
pub use config::Config;
pub use error::{NutzwertError, Result};
pub use model::{Analysis, Criterion, ScoreResult, Variant};
pub use scoring::{compute_scores, normalize_weights, DEFAULT_RATING};
pub use session::Session;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
