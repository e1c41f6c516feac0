//! Search limits and depth selection from a time budget.
//!
//! Searches are never interrupted once started. Instead the depth is chosen
//! up front from tables of measured search cost per depth, scaled by a
//! calibration constant that captures how fast the host is.

use std::hint::black_box;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::eval::Score;

/// Search cost per depth, in microseconds on the reference host, for
/// positions close to the end of the game.
pub const NEAR_TERMINAL_COSTS: [u64; 6] = [7416, 24016, 129892, 1457973, 5266859, 51633889];

/// Search cost per depth for positions in the middle of the game.
pub const MIDGAME_COSTS: [u64; 5] = [1419, 77200, 359061, 6874063, 46678036];

/// Scores below this use the near-terminal table.
pub const DEFAULT_THRESHOLD: f64 = 127.0;

/// Limits that control how deep a search goes.
///
/// A fixed depth takes precedence over the time budget.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchLimits {
    /// Fixed search depth in plies
    pub depth: Option<u8>,
    /// Time budget for this move
    pub move_time: Option<Duration>,
}

impl SearchLimits {
    /// Limits with only a depth constraint.
    pub fn depth(depth: u8) -> Self {
        Self {
            depth: Some(depth),
            move_time: None,
        }
    }

    /// Limits with both constraints; the depth is used.
    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            depth: Some(depth),
            move_time: Some(move_time),
        }
    }

    /// Limits with only a time budget; the depth is picked by [`DepthTables`].
    pub fn time(move_time: Duration) -> Self {
        Self {
            depth: None,
            move_time: Some(move_time),
        }
    }

    /// No constraint at all; the engine falls back on its own settings.
    pub fn engine_default() -> Self {
        Self {
            depth: None,
            move_time: None,
        }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(2)
    }
}

/// Cost tables used to pick a search depth that fits a time budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepthTables {
    pub near_terminal: Vec<u64>,
    pub midgame: Vec<u64>,
    pub threshold: f64,
}

impl Default for DepthTables {
    fn default() -> Self {
        Self {
            near_terminal: NEAR_TERMINAL_COSTS.to_vec(),
            midgame: MIDGAME_COSTS.to_vec(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl DepthTables {
    /// The table matching a position with the given heuristic score.
    pub fn table_for(&self, score: Score) -> &[u64] {
        let near_terminal = match score {
            Score::Loss(_) => true,
            Score::Win(_) => false,
            Score::Value(v) => v < self.threshold,
        };
        if near_terminal {
            &self.near_terminal
        } else {
            &self.midgame
        }
    }

    /// Deepest depth whose tabulated cost times `calibration` fits in
    /// `remaining`. Depth 1 is returned when nothing beyond the first
    /// entry fits.
    pub fn select_depth(&self, remaining: Duration, calibration: u64, score: Score) -> u8 {
        let table = self.table_for(score);
        let budget = remaining.as_micros();
        let cost = |i: usize| table[i] as u128 * calibration as u128;

        let depth = (1..table.len())
            .find(|&i| budget < cost(i))
            .unwrap_or(table.len().max(1));
        let depth = u8::try_from(depth).unwrap_or(u8::MAX);

        debug!(
            remaining_us = budget as u64,
            calibration,
            ?score,
            depth,
            "selected search depth"
        );
        depth
    }
}

/// Times a fixed reference workload, in microseconds plus one.
///
/// The result is never zero. Costs in [`DepthTables`] are multiplied by it,
/// so a slower host gets shallower searches for the same budget.
pub fn calibrate() -> u64 {
    let start = Instant::now();
    for n in 0..1000u64 {
        black_box(halvings(black_box(n)));
    }
    let micros = start.elapsed().as_micros() as u64 + 1;
    debug!(calibration = micros, "measured host speed");
    micros
}

fn halvings(n: u64) -> u32 {
    if n == 0 { 0 } else { 1 + halvings(black_box(n / 2)) }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
