use super::*;

#[test]
fn camps_are_point_reflections() {
    for (black, white) in camp(Side::Black).iter().zip(camp(Side::White)) {
        assert_eq!(black.reflect(), *white);
    }
    assert_eq!(CAMPS.home_set(Side::Black).len(), 19);
    assert_eq!(CAMPS.home_set(Side::White).len(), 19);
}

#[test]
fn target_is_opponent_home() {
    assert_eq!(CAMPS.target(Side::Black), CAMPS.home(Side::White));
    assert!(CAMPS.in_target(Side::Black, Cell::at(15, 15)));
    assert!(CAMPS.in_target(Side::White, Cell::at(0, 0)));
    assert_eq!(CAMPS.anchor(Side::White), Cell::at(15, 15));
}

#[test]
fn camp_edge_cells() {
    assert!(CAMPS.in_home(Side::Black, Cell::at(4, 1)));
    assert!(CAMPS.in_home(Side::Black, Cell::at(1, 4)));
    assert!(!CAMPS.in_home(Side::Black, Cell::at(4, 2)));
    assert!(!CAMPS.in_home(Side::Black, Cell::at(2, 4)));
    assert!(CAMPS.in_home(Side::White, Cell::at(11, 14)));
    assert!(!CAMPS.in_home(Side::White, Cell::at(11, 13)));
}

#[test]
fn cannot_reenter_home() {
    assert!(is_illegal(Cell::at(5, 1), Cell::at(4, 1), Side::Black));
    assert!(is_illegal(Cell::at(10, 14), Cell::at(11, 14), Side::White));
    assert!(!is_illegal(Cell::at(5, 1), Cell::at(6, 1), Side::Black));
}

#[test]
fn cannot_leave_target() {
    assert!(is_illegal(Cell::at(11, 14), Cell::at(10, 14), Side::Black));
    assert!(!is_illegal(Cell::at(11, 14), Cell::at(12, 14), Side::Black));
    assert!(is_illegal(Cell::at(1, 4), Cell::at(2, 4), Side::White));
}

#[test]
fn no_shuffling_toward_corner() {
    // Black: decreasing x or y inside the camp goes deeper.
    assert!(is_illegal(Cell::at(2, 2), Cell::at(1, 2), Side::Black));
    assert!(is_illegal(Cell::at(2, 2), Cell::at(3, 1), Side::Black));
    assert!(!is_illegal(Cell::at(2, 2), Cell::at(3, 2), Side::Black));
    assert!(!is_illegal(Cell::at(2, 2), Cell::at(2, 3), Side::Black));
    // White mirrors it.
    assert!(is_illegal(Cell::at(13, 13), Cell::at(14, 13), Side::White));
    assert!(!is_illegal(Cell::at(13, 13), Cell::at(12, 13), Side::White));
}

#[test]
fn leaving_home_is_legal() {
    assert!(!is_illegal(Cell::at(4, 1), Cell::at(5, 2), Side::Black));
    assert!(!is_illegal(Cell::at(11, 14), Cell::at(10, 13), Side::White));
}
