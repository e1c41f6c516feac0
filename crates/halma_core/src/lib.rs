pub mod board;
pub mod camp;
pub mod error;
pub mod eval;
pub mod movegen;
pub mod time_control;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use camp::*;
pub use error::BoardError;
pub use eval::*;
pub use movegen::*;
pub use time_control::*;
pub use types::*;

// =============================================================================
// Engine trait — implemented by every Halma player (minimax, random, ...)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// The move to play (None when the side has no legal move)
    pub best_move: Option<Move>,
    /// Backed-up value from the searching side's perspective
    pub score: Score,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes in the search tree
    pub nodes: u64,
    /// Whether search was stopped early. Searches always run to completion,
    /// so engines in this workspace report false.
    pub stopped: bool,
}

/// Trait that all Halma engines implement.
///
/// This allows the self-play runner to pit any two players against each
/// other without knowing how they pick moves.
pub trait Engine: Send {
    /// Search `board` for `side` within the given limits.
    fn search(&mut self, board: &BoardState, side: Side, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's name
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "ML-halma"
    }

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}

    /// Picks the move `side` should play, or None for a forced pass.
    fn choose_move(&mut self, board: &BoardState, side: Side, limits: SearchLimits) -> Option<Move> {
        self.search(board, side, limits).best_move
    }
}
