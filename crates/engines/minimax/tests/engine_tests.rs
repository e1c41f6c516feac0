//! Tests for the minimax engine through the `Engine` trait
//!
//! Covers depth selection (limits, config, time budget), move choice and
//! the forced pass on a finished game.

use std::time::Duration;

use halma_core::{BoardState, CAMPS, Cell, Engine, Move, SearchLimits, Score, Side, legal_moves};
use minimax_engine::{EngineConfig, MinimaxEngine};

// =============================================================================
// Depth Selection
// =============================================================================

#[test]
fn test_limits_depth_wins_over_config() {
    let mut engine = MinimaxEngine::with_config(EngineConfig {
        depth: Some(3),
        ..Default::default()
    });
    let board = BoardState::startpos();
    assert_eq!(engine.depth_for(&board, Side::Black, &SearchLimits::depth(1)), 1);
    assert_eq!(
        engine.depth_for(&board, Side::Black, &SearchLimits::time(Duration::ZERO)),
        3
    );
}

#[test]
fn test_zero_depth_is_raised_to_one() {
    let mut engine = MinimaxEngine::new();
    let board = BoardState::startpos();
    assert_eq!(engine.depth_for(&board, Side::Black, &SearchLimits::depth(0)), 1);
}

#[test]
fn test_time_budget_selects_depth() {
    let mut engine = MinimaxEngine::new();
    let board = BoardState::startpos();

    let tiny = SearchLimits::time(Duration::ZERO);
    assert_eq!(engine.depth_for(&board, Side::Black, &tiny), 1);

    // An hour fits the deepest entry of either table on any sane host.
    let hour = SearchLimits::time(Duration::from_secs(3600));
    let depth = engine.depth_for(&board, Side::Black, &hour);
    assert!(depth >= 2, "got depth {depth}");
}

#[test]
fn test_calibration_is_measured_once() {
    let mut engine = MinimaxEngine::new();
    let first = engine.calibration();
    assert!(first >= 1);
    assert_eq!(engine.calibration(), first);
}

#[test]
fn test_no_limits_uses_default_depth() {
    let mut engine = MinimaxEngine::new();
    let limits = SearchLimits {
        depth: None,
        move_time: None,
    };
    let board = BoardState::startpos();
    assert_eq!(
        engine.depth_for(&board, Side::White, &limits),
        minimax_engine::DEFAULT_DEPTH
    );
}

// =============================================================================
// Move Choice
// =============================================================================

#[test]
fn test_search_returns_legal_move() {
    let mut engine = MinimaxEngine::new();
    let board = BoardState::startpos();
    for side in Side::ALL {
        let result = engine.search(&board, side, SearchLimits::depth(2));
        let mv = result.best_move.expect("startpos has moves");
        assert!(legal_moves(&board, side).contains(&mv));
        assert_eq!(result.depth, 2);
        assert!(result.nodes > 1);
        assert!(!result.stopped);
    }
}

#[test]
fn test_choose_move_takes_winning_jump() {
    let hole = Cell::at(11, 14);
    let mut black: Vec<Cell> = CAMPS
        .target(Side::Black)
        .iter()
        .copied()
        .filter(|&c| c != hole)
        .collect();
    black.push(Cell::at(9, 12));
    let mut white: Vec<Cell> = (0..16).map(|x| Cell::at(x, 7)).collect();
    white.extend([Cell::at(10, 13), Cell::at(0, 8), Cell::at(1, 8)]);
    let board = BoardState::from_pieces(&black, &white).unwrap();

    let mut engine = MinimaxEngine::new();
    let mv = engine
        .choose_move(&board, Side::Black, SearchLimits::depth(2))
        .unwrap();
    assert_eq!(mv, Move::from_path(vec![Cell::at(9, 12), hole]));
}

#[test]
fn test_finished_game_is_a_forced_pass() {
    let black: Vec<Cell> = CAMPS.target(Side::Black).to_vec();
    let white: Vec<Cell> = (0..19).map(|i| Cell::at(i % 16, 7 + i / 16)).collect();
    let board = BoardState::from_pieces(&black, &white).unwrap();

    let mut engine = MinimaxEngine::new();
    let result = engine.search(&board, Side::White, SearchLimits::depth(2));
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, Score::LOSS);
}

#[test]
fn test_discount_from_config_is_used() {
    let board = BoardState::startpos();
    let mut plain = MinimaxEngine::new();
    let mut flat = MinimaxEngine::with_config(EngineConfig {
        discount: 1.0,
        ..Default::default()
    });
    let a = plain.search(&board, Side::Black, SearchLimits::depth(1));
    let b = flat.search(&board, Side::Black, SearchLimits::depth(1));
    let (Score::Value(a), Score::Value(b)) = (a.score, b.score) else {
        panic!("startpos is not terminal");
    };
    assert!((a - 0.9 * b).abs() < 1e-9);
}
