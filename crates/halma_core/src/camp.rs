//! Camp geometry.
//!
//! Black's home camp is the 19-cell staircase in the (0,0) corner:
//!
//! ```text
//!   y=0  x=0..=4
//!   y=1  x=0..=4
//!   y=2  x=0..=3
//!   y=3  x=0..=2
//!   y=4  x=0..=1
//! ```
//!
//! White's home camp is the point reflection of Black's through the board
//! centre. Each side's target camp is the other side's home camp.

use crate::types::{Cell, CellSet, PIECES_PER_SIDE, Side};

/// Black's camp cells. The first entry is the camp's deepest corner.
const BLACK_ANCHORS: [(u8, u8); PIECES_PER_SIDE] = [
    (0, 0),
    (1, 0),
    (2, 0),
    (3, 0),
    (4, 0),
    (0, 1),
    (1, 1),
    (2, 1),
    (3, 1),
    (4, 1),
    (0, 2),
    (1, 2),
    (2, 2),
    (3, 2),
    (0, 3),
    (1, 3),
    (2, 3),
    (0, 4),
    (1, 4),
];

/// Home camps of both sides, indexed by `Side::idx()`.
pub struct CampGeometry {
    cells: [[Cell; PIECES_PER_SIDE]; 2],
    sets: [CellSet; 2],
}

/// Camps are derived once, at compile time.
pub static CAMPS: CampGeometry = CampGeometry::new();

impl CampGeometry {
    pub const fn new() -> Self {
        let mut cells = [[Cell::at(0, 0); PIECES_PER_SIDE]; 2];
        let mut words = [[0u64; 4]; 2];
        let mut i = 0;
        while i < PIECES_PER_SIDE {
            let (x, y) = BLACK_ANCHORS[i];
            let black = Cell::at(x, y);
            let white = Cell::at(15 - x, 15 - y);
            cells[0][i] = black;
            cells[1][i] = white;

            let b = y as usize * 16 + x as usize;
            let w = white.y as usize * 16 + white.x as usize;
            words[0][b >> 6] |= 1u64 << (b & 63);
            words[1][w >> 6] |= 1u64 << (w & 63);
            i += 1;
        }
        Self {
            cells,
            sets: [CellSet::from_words(words[0]), CellSet::from_words(words[1])],
        }
    }

    /// The ordered 19 cells of `side`'s home camp.
    pub fn home(&self, side: Side) -> &[Cell; PIECES_PER_SIDE] {
        &self.cells[side.idx()]
    }

    /// The ordered 19 cells `side` must fill to win.
    pub fn target(&self, side: Side) -> &[Cell; PIECES_PER_SIDE] {
        &self.cells[side.other().idx()]
    }

    pub fn home_set(&self, side: Side) -> &CellSet {
        &self.sets[side.idx()]
    }

    pub fn target_set(&self, side: Side) -> &CellSet {
        &self.sets[side.other().idx()]
    }

    /// The deepest corner of `side`'s home camp.
    pub fn anchor(&self, side: Side) -> Cell {
        self.cells[side.idx()][0]
    }

    pub fn in_home(&self, side: Side, cell: Cell) -> bool {
        self.sets[side.idx()].contains(cell)
    }

    pub fn in_target(&self, side: Side, cell: Cell) -> bool {
        self.sets[side.other().idx()].contains(cell)
    }
}

impl Default for CampGeometry {
    fn default() -> Self {
        Self::new()
    }
}

/// The ordered home camp of `side`.
pub fn camp(side: Side) -> &'static [Cell; PIECES_PER_SIDE] {
    CAMPS.home(side)
}

/// Whether moving one of `side`'s pieces from `start` to `end` breaks a camp rule.
///
/// Only the endpoints matter, so a jump chain may pass through cells that
/// would be illegal destinations on their own.
///
/// 1. A piece outside its home camp may not re-enter it.
/// 2. A piece inside the target camp may not leave it.
/// 3. A move that stays inside the home camp may not bring the piece closer
///    to the camp's deepest corner along either axis.
pub fn is_illegal(start: Cell, end: Cell, side: Side) -> bool {
    let start_home = CAMPS.in_home(side, start);
    let end_home = CAMPS.in_home(side, end);

    if !start_home && end_home {
        return true;
    }
    if CAMPS.in_target(side, start) && !CAMPS.in_target(side, end) {
        return true;
    }
    if start_home && end_home {
        let corner = CAMPS.anchor(side);
        let closer = |from: u8, to: u8, c: u8| to.abs_diff(c) < from.abs_diff(c);
        return closer(start.x, end.x, corner.x) || closer(start.y, end.y, corner.y);
    }
    false
}

#[cfg(test)]
#[path = "camp_tests.rs"]
mod camp_tests;
