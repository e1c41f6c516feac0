//! Discounted minimax search with alpha-beta pruning.
//!
//! A node's value is its best child's value discounted by one ply: numeric
//! scores shrink by the discount and wins and losses move one ply further
//! away. A win reached sooner therefore outranks the same win reached later.
//! To keep cutoffs exact under the discount, each node rescales its window
//! into its children's frame before comparing child values.

use halma_core::{BoardState, Move, Mover, Score, Side, evaluate, generate_moves};
use tracing::debug;

use crate::tree::{NodeId, SearchTree};

/// Default per-ply discount.
pub const DEFAULT_DISCOUNT: f64 = 0.9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchOptions {
    /// Skip children that cannot change the result.
    pub pruning: bool,
    pub discount: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            pruning: true,
            discount: DEFAULT_DISCOUNT,
        }
    }
}

/// A finished search.
#[derive(Debug)]
pub struct SearchOutcome {
    pub tree: SearchTree,
    /// Backed-up value of the root.
    pub value: Score,
    /// None when the root is terminal or the player cannot move.
    pub best_move: Option<Move>,
    pub depth: u8,
}

impl SearchOutcome {
    pub fn nodes(&self) -> u64 {
        self.tree.len() as u64
    }

    pub fn principal_variation(&self) -> Vec<Move> {
        self.tree.principal_variation(self.tree.root())
    }
}

/// Searches `board` for `player` to a fixed depth.
pub fn search(board: &BoardState, player: Side, depth: u8, options: SearchOptions) -> SearchOutcome {
    let mut searcher = Searcher {
        tree: SearchTree::new(board.clone(), player),
        player,
        options,
    };
    let root = searcher.tree.root();
    let value = searcher.alphabeta(root, depth, Score::LOSS, Score::WIN, true);

    let tree = searcher.tree;
    let best_move = tree
        .preferred_child(root)
        .and_then(|id| tree.node(id).mv.clone());

    debug!(
        %player,
        depth,
        nodes = tree.len(),
        ?value,
        plies_to_end = ?value.plies_to_end(),
        best_move = ?best_move.as_ref().map(|mv| format!("{} -> {}", mv.from(), mv.to())),
        "search finished"
    );

    SearchOutcome {
        tree,
        value,
        best_move,
        depth,
    }
}

struct Searcher {
    tree: SearchTree,
    player: Side,
    options: SearchOptions,
}

impl Searcher {
    /// Returns the value of `id`. `alpha` and `beta` are in the same frame
    /// as that value.
    fn alphabeta(
        &mut self,
        id: NodeId,
        depth: u8,
        alpha: Score,
        beta: Score,
        maximizing: bool,
    ) -> Score {
        let static_score = self.tree.node(id).static_score;
        if depth == 0 || static_score.is_terminal() {
            return self.finish(id, static_score);
        }

        let side = if maximizing {
            self.player
        } else {
            self.player.other()
        };
        let children = self.expand(id, side);
        if children.is_empty() {
            // Nobody to hand the turn to: treat as a leaf.
            return self.finish(id, static_score);
        }

        let discount = self.options.discount;
        let mut alpha = alpha.undiscounted(discount);
        let mut beta = beta.undiscounted(discount);
        let mut best = if maximizing { Score::LOSS } else { Score::WIN };

        for (i, child) in children.into_iter().enumerate() {
            let raw = self.alphabeta(child, depth - 1, alpha, beta, !maximizing);
            if maximizing {
                if raw > best {
                    best = raw;
                    self.tree.node_mut(id).preferred = Some(i);
                }
                if self.options.pruning && best >= beta {
                    break;
                }
                alpha = alpha.max(raw);
            } else {
                if raw < best {
                    best = raw;
                    self.tree.node_mut(id).preferred = Some(i);
                }
                if self.options.pruning && best <= alpha {
                    break;
                }
                beta = beta.min(raw);
            }
        }

        self.finish(id, best.discounted(discount))
    }

    /// Generates `side`'s moves below `id` and adds them to the tree.
    ///
    /// The generator's favourite becomes the node's initial preference.
    fn expand(&mut self, id: NodeId, side: Side) -> Vec<NodeId> {
        let board = self.tree.node(id).board.clone();
        let moves = generate_moves(&board, side, &board.pieces(side));

        let mut ids = Vec::with_capacity(moves.len());
        for child in moves.children {
            let mover = Mover {
                side,
                origin: child.mv.from(),
            };
            let static_score = if side == self.player {
                child.score
            } else {
                evaluate(&child.board, self.player, Some(mover))
            };
            ids.push(
                self.tree
                    .add_child(id, child.board, child.mv, mover, static_score),
            );
        }
        self.tree.node_mut(id).preferred = moves.preferred;
        ids
    }

    fn finish(&mut self, id: NodeId, value: Score) -> Score {
        self.tree.node_mut(id).value = Some(value);
        value
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
