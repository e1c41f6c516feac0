//! Match runner for playing games between engines

use std::time::Duration;

use halma_core::{BoardState, Engine, Score, SearchLimits, Side, terminal_score};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::results::{GameEnd, GameSummary, MatchReport, MatchResult};

/// Configuration for a match
///
/// Loadable from TOML; omitted fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Fixed search depth for every engine. None leaves the depth to each
    /// engine's own configuration, or to the time budget when one is set.
    pub depth: Option<u8>,
    /// Time budget per move in milliseconds
    pub time_per_move_ms: Option<u64>,
    /// Maximum plies per game before declaring a draw
    pub max_moves: u32,
    /// Whether to alternate colours each game
    pub alternate_colors: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: None,
            time_per_move_ms: None,
            max_moves: 300,
            alternate_colors: true,
        }
    }
}

impl MatchConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Create search limits based on this config
    pub fn search_limits(&self) -> SearchLimits {
        let time = self.time_per_move_ms.map(Duration::from_millis);
        match (self.depth, time) {
            (Some(depth), Some(time)) => SearchLimits::depth_and_time(depth, time),
            (Some(depth), None) => SearchLimits::depth(depth),
            (None, Some(time)) => SearchLimits::time(time),
            (None, None) => SearchLimits::engine_default(),
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// Results are from engine1's perspective. Engine1 plays Black, who
    /// moves first, in even-numbered games.
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchReport {
        let mut result = MatchResult::new();
        let mut games = Vec::with_capacity(self.config.num_games as usize);

        for game_num in 0..self.config.num_games {
            let engine1_black = !self.config.alternate_colors || game_num % 2 == 0;

            let summary = if engine1_black {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1)
            };
            let game_result = if engine1_black {
                summary.end.black_result()
            } else {
                summary.end.black_result().flipped()
            };
            result.record(game_result);
            games.push(summary);

            info!(
                game = game_num + 1,
                of = self.config.num_games,
                engine1_side = if engine1_black { "B" } else { "W" },
                ?game_result,
                plies = summary.plies,
                wins = result.wins,
                losses = result.losses,
                draws = result.draws,
                "game finished"
            );
        }

        MatchReport {
            engine1: engine1.name().to_string(),
            engine2: engine2.name().to_string(),
            config: self.config.clone(),
            result,
            games,
        }
    }

    /// Play a single game from the start position
    pub fn play_game(&self, black: &mut dyn Engine, white: &mut dyn Engine) -> GameSummary {
        let mut board = BoardState::startpos();
        black.new_game();
        white.new_game();

        let mut side = Side::Black;
        for ply in 0..self.config.max_moves {
            let limits = self.config.search_limits();
            let result = match side {
                Side::Black => black.search(&board, side, limits),
                Side::White => white.search(&board, side, limits),
            };

            let Some(mv) = result.best_move else {
                return GameSummary {
                    end: GameEnd::Stuck(side),
                    plies: ply,
                };
            };
            debug!(%side, ply, from = %mv.from(), to = %mv.to(), hops = mv.hops(), "move played");
            board.apply(&mv);

            for s in [side, side.other()] {
                if terminal_score(&board, s).is_some_and(Score::is_win) {
                    return GameSummary {
                        end: GameEnd::Won(s),
                        plies: ply + 1,
                    };
                }
            }
            side = side.other();
        }

        GameSummary {
            end: GameEnd::MoveCap,
            plies: self.config.max_moves,
        }
    }
}

/// Quick utility to run a fixed-depth match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        depth: Some(depth),
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2).result
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
