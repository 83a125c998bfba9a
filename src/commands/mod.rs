//! CLI command implementations.
//!
//! Each command lives in its own submodule with an options struct and
//! an `execute_*` entry point.

pub mod normalize;
pub mod output;
pub mod run;
pub mod score;

pub use normalize::{execute_normalize, NormalizeOptions};
pub use output::render_table;
pub use run::{execute_run, RunOptions};
pub use score::{execute_score, ScoreOptions};
