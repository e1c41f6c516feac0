//! Minimax Halma Engine
//!
//! Discounted alpha-beta search over an arena tree, with the depth either
//! fixed or chosen from a time budget using calibrated cost tables.

mod config;
mod search;
mod tree;

use halma_core::{
    BoardState, Engine, SearchLimits, SearchResult, Side, calibrate, evaluate,
};
use tracing::debug;

pub use config::{ConfigError, EngineConfig};
pub use search::{DEFAULT_DISCOUNT, SearchOptions, SearchOutcome, search};
pub use tree::{NodeId, SearchNode, SearchTree};

/// Depth used when neither the limits nor the config give one.
pub const DEFAULT_DEPTH: u8 = 2;

/// Halma engine searching a discounted minimax tree with alpha-beta pruning.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    config: EngineConfig,
    /// Host speed factor, measured on first use.
    calibration: Option<u64>,
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The calibration constant, measuring it on the first call.
    pub fn calibration(&mut self) -> u64 {
        *self.calibration.get_or_insert_with(calibrate)
    }

    /// Picks the depth for this decision.
    ///
    /// A depth in `limits` wins, then the configured depth, then the depth
    /// tables when a time budget is given.
    pub fn depth_for(&mut self, board: &BoardState, side: Side, limits: &SearchLimits) -> u8 {
        if let Some(depth) = limits.depth.or(self.config.depth) {
            return depth.max(1);
        }
        match limits.move_time {
            Some(remaining) => {
                let calibration = self.calibration();
                let score = evaluate(board, side, None);
                self.config
                    .depth_tables
                    .select_depth(remaining, calibration, score)
            }
            None => DEFAULT_DEPTH,
        }
    }

    /// Runs a full search and keeps the tree for inspection.
    pub fn analyse(&mut self, board: &BoardState, side: Side, limits: &SearchLimits) -> SearchOutcome {
        let depth = self.depth_for(board, side, limits);
        let options = SearchOptions {
            pruning: true,
            discount: self.config.discount,
        };
        let outcome = search(board, side, depth, options);
        self.nodes = outcome.nodes();
        outcome
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &BoardState, side: Side, limits: SearchLimits) -> SearchResult {
        let outcome = self.analyse(board, side, &limits);
        debug!(
            engine = self.name(),
            depth = outcome.depth,
            nodes = self.nodes,
            pv_len = outcome.principal_variation().len(),
            "decision made"
        );

        SearchResult {
            best_move: outcome.best_move,
            score: outcome.value,
            depth: outcome.depth,
            nodes: self.nodes,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
