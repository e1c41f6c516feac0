use super::*;
use halma_core::{CAMPS, Cell, legal_moves, terminal_score};

fn unpruned() -> SearchOptions {
    SearchOptions {
        pruning: false,
        ..Default::default()
    }
}

/// A few plies into the game, following the move generator's favourites.
fn midgame() -> BoardState {
    let mut board = BoardState::startpos();
    let mut side = Side::Black;
    for _ in 0..6 {
        let moves = generate_moves(&board, side, &board.pieces(side));
        let child = moves.preferred_child().unwrap();
        board = child.board.clone();
        side = side.other();
    }
    board
}

/// Black one jump away from filling White's camp.
fn winning_jump_board() -> BoardState {
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
    BoardState::from_pieces(&black, &white).unwrap()
}

/// Black one step from victory, with a slower piece listed first.
///
/// White still holds (15,15) in its own camp, so seventeen Black pieces in
/// the camp plus (13,11) stepping into (14,11) complete it. The straggler on
/// (0,5) comes first in row-major order, so its moves are searched first.
fn winning_step_board() -> BoardState {
    let hole = Cell::at(14, 11);
    let held = Cell::at(15, 15);
    let mut black: Vec<Cell> = CAMPS
        .target(Side::Black)
        .iter()
        .copied()
        .filter(|&c| c != hole && c != held)
        .collect();
    black.extend([Cell::at(13, 11), Cell::at(0, 5)]);
    let mut white: Vec<Cell> = (0..16).map(|x| Cell::at(x, 7)).collect();
    white.extend([held, Cell::at(0, 8), Cell::at(1, 8)]);
    BoardState::from_pieces(&black, &white).unwrap()
}

#[test]
fn test_search_start_position() {
    let board = BoardState::startpos();
    let outcome = search(&board, Side::Black, 2, SearchOptions::default());
    let mv = outcome.best_move.clone().expect("startpos has moves");
    assert!(legal_moves(&board, Side::Black).contains(&mv));
    assert!(outcome.nodes() > 1);
    assert!(matches!(outcome.value, Score::Value(_)));
}

#[test]
fn test_depth_one_discounts_best_child() {
    let board = BoardState::startpos();
    let outcome = search(&board, Side::Black, 1, SearchOptions::default());

    let moves = generate_moves(&board, Side::Black, &board.pieces(Side::Black));
    let best = moves.children.iter().map(|c| c.score).fold(Score::LOSS, Score::max);
    assert_eq!(outcome.value, best.discounted(0.9));

    let chosen = outcome.best_move.unwrap();
    let child = moves.children.iter().find(|c| c.mv == chosen).unwrap();
    assert_eq!(child.score, best);
}

#[test]
fn test_depth_zero_returns_static_score() {
    let board = BoardState::startpos();
    let outcome = search(&board, Side::White, 0, SearchOptions::default());
    assert_eq!(outcome.value, evaluate(&board, Side::White, None));
    assert_eq!(outcome.best_move, None);
    assert_eq!(outcome.nodes(), 1);
}

#[test]
fn test_finished_game_has_no_move() {
    let black: Vec<Cell> = CAMPS.target(Side::Black).to_vec();
    let white: Vec<Cell> = (0..19).map(|i| Cell::at(i % 16, 7 + i / 16)).collect();
    let board = BoardState::from_pieces(&black, &white).unwrap();

    let outcome = search(&board, Side::Black, 3, SearchOptions::default());
    assert_eq!(outcome.value, Score::WIN);
    assert_eq!(outcome.best_move, None);

    let outcome = search(&board, Side::White, 3, SearchOptions::default());
    assert_eq!(outcome.value, Score::LOSS);
    assert_eq!(outcome.best_move, None);
}

#[test]
fn test_finds_winning_jump() {
    let board = winning_jump_board();
    let winning = Move::from_path(vec![Cell::at(9, 12), Cell::at(11, 14)]);
    for depth in 1..=2 {
        let outcome = search(&board, Side::Black, depth, SearchOptions::default());
        assert_eq!(outcome.value, Score::Win(1), "depth {depth}");
        assert_eq!(outcome.best_move.as_ref(), Some(&winning), "depth {depth}");
    }
}

#[test]
fn test_takes_immediate_win_over_later_one() {
    let board = winning_step_board();
    let winning = Move::step(Cell::at(13, 11), Cell::at(14, 11));
    assert!(terminal_score(&board.with_move(&winning), Side::Black).is_some_and(Score::is_win));

    for depth in 1..=3 {
        let outcome = search(&board, Side::Black, depth, SearchOptions::default());
        assert_eq!(outcome.best_move.as_ref(), Some(&winning), "depth {depth}");
        assert_eq!(outcome.value, Score::Win(1), "depth {depth}");
    }
}

#[test]
fn test_later_wins_rank_below_sooner_ones() {
    let board = winning_step_board();
    let outcome = search(&board, Side::Black, 3, unpruned());
    let tree = &outcome.tree;
    let mut straggler_moves = 0;
    for &child in &tree.node(tree.root()).children {
        let node = tree.node(child);
        let (mv, value) = (node.mv.as_ref().unwrap(), node.value.unwrap());
        if node.static_score.is_win() {
            assert_eq!(value, Score::WIN);
        } else if mv.from() == Cell::at(0, 5) {
            // White cannot reach the hole, so Black wins on its next turn.
            assert_eq!(value, Score::Win(2), "{mv}");
            straggler_moves += 1;
        }
    }
    assert!(straggler_moves > 0);
    assert_eq!(outcome.value, Score::Win(1));

    let pruned = search(&board, Side::Black, 3, SearchOptions::default());
    assert_eq!(pruned.value, outcome.value);
    assert_eq!(pruned.best_move, outcome.best_move);
}

#[test]
fn test_pruning_preserves_value() {
    let positions = [BoardState::startpos(), midgame(), winning_jump_board()];
    for board in &positions {
        for side in Side::ALL {
            for depth in 1..=2 {
                let pruned = search(board, side, depth, SearchOptions::default());
                let full = search(board, side, depth, unpruned());
                assert_eq!(pruned.value, full.value, "{side} depth {depth}");
                assert_eq!(pruned.best_move, full.best_move, "{side} depth {depth}");
                assert!(pruned.nodes() <= full.nodes());
            }
        }
    }
}

#[test]
fn test_pruning_preserves_value_at_depth_three() {
    let board = BoardState::startpos();
    let pruned = search(&board, Side::Black, 3, SearchOptions::default());
    let full = search(&board, Side::Black, 3, unpruned());
    assert_eq!(pruned.value, full.value);
    assert_eq!(pruned.best_move, full.best_move);
    assert!(pruned.nodes() < full.nodes());
}

#[test]
fn test_principal_variation_follows_preferred_children() {
    let board = BoardState::startpos();
    let outcome = search(&board, Side::Black, 2, SearchOptions::default());
    let pv = outcome.principal_variation();
    assert_eq!(pv.len(), 2);
    assert_eq!(Some(&pv[0]), outcome.best_move.as_ref());

    // The line is playable: Black's move, then White's reply.
    let after = board.with_move(&pv[0]);
    assert!(legal_moves(&after, Side::White).contains(&pv[1]));
}

#[test]
fn test_tree_links_are_consistent() {
    let outcome = search(&midgame(), Side::White, 2, SearchOptions::default());
    let tree = &outcome.tree;

    let mut seen = 1;
    let mut stack = vec![tree.root()];
    while let Some(id) = stack.pop() {
        let node = tree.node(id);
        assert!(tree.ply(id) <= 2);
        if let Some(i) = node.preferred {
            assert!(i < node.children.len());
        }
        for &child in &node.children {
            assert_eq!(tree.node(child).parent, Some(id));
            assert!(tree.node(child).mover.is_some());
            seen += 1;
            stack.push(child);
        }
    }
    assert_eq!(seen, tree.len());
}

#[test]
fn test_opponent_nodes_are_scored_for_searching_player() {
    let board = BoardState::startpos();
    let outcome = search(&board, Side::Black, 2, SearchOptions::default());
    let tree = &outcome.tree;
    let first = tree.preferred_child(tree.root()).unwrap();
    for &reply in &tree.node(first).children {
        let node = tree.node(reply);
        assert_eq!(node.mover.unwrap().side, Side::White);
        assert_eq!(
            node.static_score,
            evaluate(&node.board, Side::Black, node.mover)
        );
    }
}
