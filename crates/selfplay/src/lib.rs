//! Self-play Runner for ML-halma
//!
//! This crate provides infrastructure for:
//! - Playing games between engines from the start position
//! - Summarising match results, optionally as JSON
//!
//! # Usage
//!
//! ```bash
//! # Minimax against the random baseline
//! cargo run -p selfplay -- minimax random --games 10 --depth 2
//!
//! # Time-budgeted minimax with a match config, JSON summary on stdout
//! cargo run -p selfplay -- minimax minimax --config match.toml --json
//! ```

mod match_runner;
mod results;

pub use match_runner::*;
pub use results::*;
