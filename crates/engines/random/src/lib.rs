//! Random Move Halma Engine
//!
//! Picks uniformly among the moves the move generator offers. Serves as the
//! baseline opponent in self-play: any real engine should beat it easily.

use halma_core::{BoardState, Engine, SearchLimits, SearchResult, Side, evaluate, generate_moves};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// A Halma engine that plays random legal moves.
///
/// Seeded engines replay the same choices, which keeps self-play runs
/// reproducible.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self { rng, nodes: 0 }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &BoardState, side: Side, _limits: SearchLimits) -> SearchResult {
        let moves = generate_moves(board, side, &board.pieces(side));
        self.nodes = moves.len() as u64 + 1;

        let picked = moves.children.choose(&mut self.rng);
        let score = match picked {
            Some(child) => child.score,
            None => evaluate(board, side, None),
        };

        SearchResult {
            best_move: picked.map(|child| child.mv.clone()),
            score,
            depth: 1,
            nodes: self.nodes,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
