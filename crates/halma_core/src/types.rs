use std::fmt;

use serde::{Deserialize, Serialize};

/// Width and height of the board.
pub const BOARD_SIZE: i8 = 16;
/// Number of cells on the board.
pub const NUM_CELLS: usize = 256;
/// Pieces per side, which is also the size of every camp.
pub const PIECES_PER_SIDE: usize = 19;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Black,
    White,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Black, Side::White];

    pub fn other(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Side::Black => 0,
            Side::White => 1,
        }
    }
    pub fn symbol(self) -> char {
        match self {
            Side::Black => 'B',
            Side::White => 'W',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => f.write_str("Black"),
            Side::White => f.write_str("White"),
        }
    }
}

/// A board coordinate, `x` is the column and `y` the row, both in 0..16.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: u8,
    pub y: u8,
}

impl Cell {
    /// Bounds-checked constructor from signed coordinates.
    pub fn new(x: i8, y: i8) -> Option<Cell> {
        if (0..BOARD_SIZE).contains(&x) && (0..BOARD_SIZE).contains(&y) {
            Some(Cell {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// Constructor for coordinates already known to be on the board.
    pub const fn at(x: u8, y: u8) -> Cell {
        assert!(x < 16 && y < 16, "cell out of bounds");
        Cell { x, y }
    }

    #[inline]
    pub fn index(self) -> usize {
        self.y as usize * BOARD_SIZE as usize + self.x as usize
    }

    pub fn from_index(idx: usize) -> Cell {
        Cell {
            x: (idx % BOARD_SIZE as usize) as u8,
            y: (idx / BOARD_SIZE as usize) as u8,
        }
    }

    pub fn offset(self, dx: i8, dy: i8) -> Option<Cell> {
        Cell::new(self.x as i8 + dx, self.y as i8 + dy)
    }

    /// Point reflection through the board centre, (x, y) -> (15 - x, 15 - y).
    pub fn reflect(self) -> Cell {
        Cell {
            x: 15 - self.x,
            y: 15 - self.y,
        }
    }

    pub fn is_adjacent(self, other: Cell) -> bool {
        self != other && self.x.abs_diff(other.x) <= 1 && self.y.abs_diff(other.y) <= 1
    }

    /// The up to 8 in-bounds neighbours, column-major from the lower-left.
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        (-1i8..=1)
            .flat_map(|dx| (-1i8..=1).map(move |dy| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// Euclidean distance to another cell.
    pub fn distance(self, other: Cell) -> f64 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// A set of cells backed by four 64-bit words, one bit per cell index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CellSet([u64; 4]);

impl CellSet {
    pub const EMPTY: CellSet = CellSet([0; 4]);

    pub const fn from_words(words: [u64; 4]) -> Self {
        CellSet(words)
    }

    #[inline(always)]
    pub fn contains(&self, cell: Cell) -> bool {
        let idx = cell.index();
        self.0[idx >> 6] & (1u64 << (idx & 63)) != 0
    }

    #[inline(always)]
    pub fn insert(&mut self, cell: Cell) {
        let idx = cell.index();
        self.0[idx >> 6] |= 1u64 << (idx & 63);
    }

    #[inline(always)]
    pub fn remove(&mut self, cell: Cell) {
        let idx = cell.index();
        self.0[idx >> 6] &= !(1u64 << (idx & 63));
    }

    pub fn len(&self) -> usize {
        self.0.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&w| w == 0)
    }

    /// Cells in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.0.iter().enumerate().flat_map(|(word_idx, &word)| {
            let mut bits = word;
            std::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let bit = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                Some(Cell::from_index(word_idx * 64 + bit))
            })
        })
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut set = CellSet::EMPTY;
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

/// An ordered sequence of at least two cells.
///
/// A two-cell move between adjacent cells is a step. Anything else is a
/// jump chain whose consecutive cells are single hops.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub path: Vec<Cell>,
}

impl Move {
    pub fn step(from: Cell, to: Cell) -> Self {
        Self {
            path: vec![from, to],
        }
    }

    pub fn from_path(path: Vec<Cell>) -> Self {
        debug_assert!(path.len() >= 2, "a move needs at least two cells");
        Self { path }
    }

    pub fn from(&self) -> Cell {
        self.path[0]
    }

    pub fn to(&self) -> Cell {
        self.path[self.path.len() - 1]
    }

    pub fn is_jump(&self) -> bool {
        !self.path[0].is_adjacent(self.path[1])
    }

    /// Number of hops (1 for a step).
    pub fn hops(&self) -> usize {
        self.path.len() - 1
    }
}

impl fmt::Display for Move {
    /// One line per hop: `E x,y x,y` for a step, `J x,y x,y` for a jump.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = if self.is_jump() { 'J' } else { 'E' };
        for pair in self.path.windows(2) {
            writeln!(f, "{tag} {} {}", pair[0], pair[1])?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
