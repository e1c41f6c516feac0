//! Heuristic evaluation and win/loss detection.
//!
//! Scores are always computed from one player's point of view. A finished
//! game is reported as [`Score::Win`] or [`Score::Loss`] rather than as an
//! extreme float, so search arithmetic never has to special-case infinities.

use std::cmp::Ordering;
use std::f64::consts::SQRT_2;

use crate::board::BoardState;
use crate::camp::CAMPS;
use crate::types::{Cell, PIECES_PER_SIDE, Side};

/// Pieces within this distance of the main diagonal get full directional credit.
const CORRIDOR: f64 = 4.0 / SQRT_2;

/// Result of evaluating a state.
///
/// Wins and losses carry the number of plies until the game ends, counted
/// from the state being scored. Ordering: `Loss(_) < Value(_) < Win(_)`;
/// values compare numerically, a sooner win beats a later one and a later
/// loss beats a sooner one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Score {
    Loss(u16),
    Value(f64),
    Win(u16),
}

impl Score {
    /// Game already won.
    pub const WIN: Score = Score::Win(0);
    /// Game already lost. Also the lowest score there is.
    pub const LOSS: Score = Score::Loss(0);

    pub fn is_terminal(self) -> bool {
        !matches!(self, Score::Value(_))
    }

    pub fn is_win(self) -> bool {
        matches!(self, Score::Win(_))
    }

    pub fn is_loss(self) -> bool {
        matches!(self, Score::Loss(_))
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Score::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Plies until the game ends, for wins and losses.
    pub fn plies_to_end(self) -> Option<u16> {
        match self {
            Score::Win(plies) | Score::Loss(plies) => Some(plies),
            Score::Value(_) => None,
        }
    }

    /// The score one ply further from the position it was measured at.
    ///
    /// Numeric scores are multiplied by `discount`; wins and losses move
    /// one ply further away.
    pub fn discounted(self, discount: f64) -> Score {
        match self {
            Score::Value(v) => Score::Value(v * discount),
            Score::Win(plies) => Score::Win(plies.saturating_add(1)),
            Score::Loss(plies) => Score::Loss(plies.saturating_add(1)),
        }
    }

    /// Inverse of [`Score::discounted`], saturating at zero plies.
    pub fn undiscounted(self, discount: f64) -> Score {
        match self {
            Score::Value(v) => Score::Value(v / discount),
            Score::Win(plies) => Score::Win(plies.saturating_sub(1)),
            Score::Loss(plies) => Score::Loss(plies.saturating_sub(1)),
        }
    }

    pub fn max(self, other: Score) -> Score {
        if other > self { other } else { self }
    }

    pub fn min(self, other: Score) -> Score {
        if other < self { other } else { self }
    }

    fn rank(self) -> (u8, i32) {
        match self {
            Score::Loss(plies) => (0, i32::from(plies)),
            Score::Value(_) => (1, 0),
            Score::Win(plies) => (2, -i32::from(plies)),
        }
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Score) -> Option<Ordering> {
        match (self, other) {
            (Score::Value(a), Score::Value(b)) => a.partial_cmp(b),
            _ => Some(self.rank().cmp(&other.rank())),
        }
    }
}

/// Who made the move that produced a state, and where the piece started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mover {
    pub side: Side,
    pub origin: Cell,
}

/// Win/loss detection for `player`.
///
/// A win needs at least one of `player`'s pieces in the target camp, with
/// those pieces plus the opponent's pieces still at home filling all 19
/// target cells. A loss is the same condition for the opponent.
pub fn terminal_score(board: &BoardState, player: Side) -> Option<Score> {
    let opponent = player.other();
    let occupied_by = |cells: &[Cell; PIECES_PER_SIDE], side: Side| {
        cells.iter().filter(|&&c| board.get(c) == Some(side)).count()
    };

    let home = CAMPS.home(player);
    let target = CAMPS.target(player);

    let in_target = occupied_by(target, player);
    let opponent_at_home = occupied_by(target, opponent);
    if in_target > 0 && in_target + opponent_at_home == PIECES_PER_SIDE {
        return Some(Score::WIN);
    }

    let in_home = occupied_by(home, player);
    let intruders = occupied_by(home, opponent);
    if intruders > 0 && in_home + intruders == PIECES_PER_SIDE {
        return Some(Score::LOSS);
    }
    None
}

/// Evaluates `board` for `player`.
///
/// `mover` describes the move that produced the board, when there was one.
/// It only matters for the squatter penalty: if `player` still has pieces
/// at home, moved last, and that move did not start in the home camp, the
/// score is halved. When someone else moved the penalty does not apply.
pub fn evaluate(board: &BoardState, player: Side, mover: Option<Mover>) -> Score {
    if let Some(score) = terminal_score(board, player) {
        return score;
    }

    let home = CAMPS.home(player);
    let mut in_home = 0.0;
    let mut in_target = 0.0;
    let mut moving_out = false;
    for &cell in home {
        if mover.is_some_and(|m| m.origin == cell) {
            moving_out = true;
        }
        if board.get(cell) == Some(player) {
            in_home += 1.0;
        }
        if board.get(cell.reflect()) == Some(player) {
            in_target += 1.0;
        }
    }

    let anchor = CAMPS.anchor(player);
    let mut directional = 0.0;
    let mut from_home = 0.0;
    for cell in board.pieces(player) {
        let off_diagonal = (cell.x as f64 - cell.y as f64).abs() / SQRT_2;
        directional += if off_diagonal > CORRIDOR {
            1.0 / off_diagonal
        } else {
            1.0
        };
        from_home += cell.distance(anchor);
    }

    let total = in_target + directional - in_home + from_home;

    let squatting = in_home > 0.0;
    let moved_last = mover.is_some_and(|m| m.side == player);
    if moved_last && squatting && !moving_out {
        Score::Value(total / 2.0)
    } else {
        Score::Value(total)
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
