//! Game and match results

use serde::{Deserialize, Serialize};

use halma_core::Side;

use crate::match_runner::MatchConfig;

/// Result of a single game from one engine's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEnd {
    /// The side filled its target camp.
    Won(Side),
    /// The side had no legal move and forfeits.
    Stuck(Side),
    /// Move cap reached.
    MoveCap,
}

impl GameEnd {
    /// Result for Black, who moves first.
    pub fn black_result(self) -> GameResult {
        match self {
            GameEnd::Won(Side::Black) | GameEnd::Stuck(Side::White) => GameResult::Win,
            GameEnd::Won(Side::White) | GameEnd::Stuck(Side::Black) => GameResult::Loss,
            GameEnd::MoveCap => GameResult::Draw,
        }
    }
}

/// Summary of one finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub end: GameEnd,
    pub plies: u32,
}

/// Result of a match between two engines, from engine1's perspective
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// Everything the binary reports about a match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub engine1: String,
    pub engine2: String,
    pub config: MatchConfig,
    pub result: MatchResult,
    pub games: Vec<GameSummary>,
}

impl MatchReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn print_report(&self) {
        println!("=== {} vs {} ===", self.engine1, self.engine2);
        for (i, game) in self.games.iter().enumerate() {
            let end = match game.end {
                GameEnd::Won(side) => format!("{side} filled its target camp"),
                GameEnd::Stuck(side) => format!("{side} had no move"),
                GameEnd::MoveCap => "move cap reached".to_string(),
            };
            println!("Game {}: {} after {} plies", i + 1, end, game.plies);
        }
        println!(
            "{}: {} wins, {} losses, {} draws",
            self.engine1, self.result.wins, self.result.losses, self.result.draws
        );
        println!("Score: {:.1}%", self.result.score() * 100.0);
    }
}
