//! Move generation: single steps and multi-hop jump chains.
//!
//! Jump chains are explored recursively from every landing cell. At each hop
//! the generator keeps whichever is better for the mover: stopping there, or
//! the best continuation. The winner is squashed into one flat [`Move`]
//! carrying every waypoint, so callers only ever see flat moves.

use std::collections::HashMap;

use tracing::trace;

use crate::board::BoardState;
use crate::camp::{CAMPS, is_illegal};
use crate::eval::{Mover, Score, evaluate};
use crate::types::{Cell, CellSet, Move, Side};

/// A successor state together with the move producing it, scored for the mover.
#[derive(Clone, Debug)]
pub struct Child {
    pub board: BoardState,
    pub mv: Move,
    pub score: Score,
}

/// Generated children plus the index of the best one for the mover.
#[derive(Clone, Debug, Default)]
pub struct MoveList {
    pub children: Vec<Child>,
    pub preferred: Option<usize>,
}

impl MoveList {
    /// Appends a child, making it preferred if it strictly beats the current best.
    pub fn push(&mut self, child: Child) {
        let better = match self.preferred {
            Some(idx) => child.score > self.children[idx].score,
            None => true,
        };
        if better {
            self.preferred = Some(self.children.len());
        }
        self.children.push(child);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn preferred_child(&self) -> Option<&Child> {
        self.preferred.map(|idx| &self.children[idx])
    }

    fn preferred_score(&self) -> Option<Score> {
        self.preferred_child().map(|c| c.score)
    }

    /// Drops children matching `illegal` and re-selects the preferred one.
    fn discard(&mut self, mut illegal: impl FnMut(&Child) -> bool) {
        let before = self.children.len();
        self.children.retain(|c| !illegal(c));
        if self.children.len() != before {
            self.preferred = best_index(&self.children);
        }
    }
}

fn best_index(children: &[Child]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, child) in children.iter().enumerate() {
        if best.is_none_or(|b| child.score > children[b].score) {
            best = Some(idx);
        }
    }
    best
}

/// Identifies one hop of one piece's jump exploration.
///
/// The origin is part of the key: the board seen from `from` depends on
/// which piece is travelling, since its starting cell is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct JumpKey {
    origin: Cell,
    from: Cell,
    landing: Cell,
}

/// A squashed chain starting at some hop's `from` cell.
#[derive(Clone, Debug)]
struct Chain {
    path: Vec<Cell>,
    board: BoardState,
    score: Score,
}

/// Fully explored hops of the current move-generation pass.
///
/// Created by [`generate_moves`] and dropped when it returns. Entries are
/// never modified once inserted.
#[derive(Debug, Default)]
pub struct JumpCache {
    entries: HashMap<JumpKey, Chain>,
    hits: u64,
}

impl JumpCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of explored hops stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of hops answered from the cache instead of re-explored.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Looks up a hop whose continuation does not revisit any cell in `visited`.
    fn reuse(&mut self, key: &JumpKey, visited: &CellSet) -> Option<Chain> {
        let chain = self.entries.get(key)?;
        if chain.path[1..].iter().any(|&c| visited.contains(c)) {
            return None;
        }
        self.hits += 1;
        Some(chain.clone())
    }

    fn store(&mut self, key: JumpKey, chain: &Chain) {
        self.entries.entry(key).or_insert_with(|| chain.clone());
    }
}

/// All legal moves for `side`, the preferred one flagged.
///
/// `pieces` are `side`'s piece positions. While any of them is still in the
/// home camp only those may move; if that yields nothing at all, every piece
/// is considered instead. A winning step ends generation immediately.
pub fn generate_moves(board: &BoardState, side: Side, pieces: &[Cell]) -> MoveList {
    let mut cache = JumpCache::new();

    let home = CAMPS.home_set(side);
    let at_home: Vec<Cell> = pieces.iter().copied().filter(|&c| home.contains(c)).collect();
    let sources: &[Cell] = if at_home.is_empty() { pieces } else { &at_home };

    let mut steps = step_moves(board, side, sources);
    if steps.preferred_score().is_some_and(Score::is_win) {
        return steps;
    }
    let mut jumps = legal_jumps(board, side, sources, &mut cache);

    if steps.is_empty() && jumps.is_empty() && sources.len() != pieces.len() {
        trace!(%side, "home camp pieces are stuck, considering all pieces");
        steps = step_moves(board, side, pieces);
        if steps.preferred_score().is_some_and(Score::is_win) {
            return steps;
        }
        jumps = legal_jumps(board, side, pieces, &mut cache);
    }

    let preferred = match (steps.preferred, jumps.preferred) {
        (None, None) => None,
        (Some(s), None) => Some(s),
        (None, Some(j)) => Some(steps.len() + j),
        (Some(s), Some(j)) => {
            if steps.children[s].score > jumps.children[j].score {
                Some(s)
            } else {
                Some(steps.len() + j)
            }
        }
    };

    trace!(
        %side,
        steps = steps.len(),
        jumps = jumps.len(),
        cached = cache.len(),
        cache_hits = cache.hits(),
        "generated moves"
    );

    let mut children = steps.children;
    children.extend(jumps.children);
    MoveList {
        children,
        preferred,
    }
}

/// Convenience wrapper returning just the moves for `side`.
pub fn legal_moves(board: &BoardState, side: Side) -> Vec<Move> {
    generate_moves(board, side, &board.pieces(side))
        .children
        .into_iter()
        .map(|c| c.mv)
        .collect()
}

/// Single-cell moves into empty neighbours.
///
/// Stops as soon as a step wins the game.
pub fn step_moves(board: &BoardState, side: Side, sources: &[Cell]) -> MoveList {
    let mut list = MoveList::default();
    for &from in sources {
        for to in from.neighbors() {
            if !board.is_empty(to) || is_illegal(from, to, side) {
                continue;
            }
            let mv = Move::step(from, to);
            let next = board.with_move(&mv);
            let score = evaluate(&next, side, Some(Mover { side, origin: from }));
            list.push(Child {
                board: next,
                mv,
                score,
            });
            if score.is_win() {
                return list;
            }
        }
    }
    list
}

/// Jump chains whose endpoints pass the camp rules.
fn legal_jumps(board: &BoardState, side: Side, sources: &[Cell], cache: &mut JumpCache) -> MoveList {
    let mut jumps = jump_moves(board, side, sources, cache);
    jumps.discard(|c| is_illegal(c.mv.from(), c.mv.to(), side));
    jumps
}

/// Squashed jump chains for every source piece.
///
/// Camp rules are not applied here; callers check the chain endpoints.
pub fn jump_moves(
    board: &BoardState,
    side: Side,
    sources: &[Cell],
    cache: &mut JumpCache,
) -> MoveList {
    let mut list = MoveList::default();
    for &origin in sources {
        let mut visited = CellSet::EMPTY;
        visited.insert(origin);
        for chain in explore(board, side, origin, origin, &mut visited, cache) {
            list.push(Child {
                board: chain.board,
                mv: Move::from_path(chain.path),
                score: chain.score,
            });
        }
    }
    list
}

/// Explores every hop out of `from`. `board` has the travelling piece on `from`.
///
/// Each returned chain starts at `from`. `visited` holds the cells of the
/// chain so far and is restored before returning.
fn explore(
    board: &BoardState,
    side: Side,
    origin: Cell,
    from: Cell,
    visited: &mut CellSet,
    cache: &mut JumpCache,
) -> Vec<Chain> {
    let mut out = Vec::new();
    for over in from.neighbors() {
        if board.is_empty(over) {
            continue;
        }
        let dx = over.x as i8 - from.x as i8;
        let dy = over.y as i8 - from.y as i8;
        let Some(landing) = over.offset(dx, dy) else {
            continue;
        };
        if visited.contains(landing) || !board.is_empty(landing) {
            continue;
        }

        let key = JumpKey {
            origin,
            from,
            landing,
        };
        if let Some(chain) = cache.reuse(&key, visited) {
            out.push(chain);
            continue;
        }

        let mut next = board.clone();
        next.relocate(from, landing);
        let score = evaluate(&next, side, Some(Mover { side, origin }));

        visited.insert(landing);
        let continuations = explore(&next, side, origin, landing, visited, cache);
        visited.remove(landing);

        let best = continuations
            .into_iter()
            .reduce(|best, c| if c.score > best.score { c } else { best });
        let chosen = match best {
            Some(cont) if cont.score > score => {
                let mut path = Vec::with_capacity(cont.path.len() + 1);
                path.push(from);
                path.extend(cont.path);
                Chain {
                    path,
                    board: cont.board,
                    score: cont.score,
                }
            }
            _ => Chain {
                path: vec![from, landing],
                board: next,
                score,
            },
        };
        cache.store(key, &chosen);
        out.push(chosen);
    }
    out
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
