use std::fmt;

use crate::camp::CAMPS;
use crate::error::BoardError;
use crate::types::*;

/// A 16x16 grid of markers; `None` is an empty cell.
///
/// Every reachable state holds exactly 19 pieces per side. Moves only
/// relocate a piece, nothing is ever captured.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BoardState {
    cells: [Option<Side>; NUM_CELLS],
}

impl BoardState {
    /// Both sides on their home camps, the rest of the board empty.
    pub fn startpos() -> Self {
        let mut cells = [None; NUM_CELLS];
        for side in Side::ALL {
            for cell in CAMPS.home(side) {
                cells[cell.index()] = Some(side);
            }
        }
        Self { cells }
    }

    /// Parses 16 rows of `B`, `W` and `.`; row `i` is `y = i`, column `j` is `x = j`.
    ///
    /// Whitespace inside a row is ignored so boards can be written with spacing.
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardError> {
        if rows.len() != BOARD_SIZE as usize {
            return Err(BoardError::RowCount { got: rows.len() });
        }

        let mut cells = [None; NUM_CELLS];
        for (y, row) in rows.iter().enumerate() {
            let markers: Vec<char> = row.chars().filter(|c| !c.is_whitespace()).collect();
            if markers.len() != BOARD_SIZE as usize {
                return Err(BoardError::RowWidth {
                    row: y,
                    got: markers.len(),
                });
            }
            for (x, &marker) in markers.iter().enumerate() {
                cells[y * BOARD_SIZE as usize + x] = match marker {
                    'B' | 'b' => Some(Side::Black),
                    'W' | 'w' => Some(Side::White),
                    '.' => None,
                    _ => return Err(BoardError::InvalidMarker { marker, x, y }),
                };
            }
        }

        Self { cells }.validated()
    }

    /// Builds a board from explicit piece lists.
    pub fn from_pieces(black: &[Cell], white: &[Cell]) -> Result<Self, BoardError> {
        let mut cells = [None; NUM_CELLS];
        for &cell in black {
            cells[cell.index()] = Some(Side::Black);
        }
        for &cell in white {
            if cells[cell.index()].is_some() {
                return Err(BoardError::Overlap {
                    x: cell.x,
                    y: cell.y,
                });
            }
            cells[cell.index()] = Some(Side::White);
        }
        Self { cells }.validated()
    }

    fn validated(self) -> Result<Self, BoardError> {
        for side in Side::ALL {
            let got = self.count(side);
            if got != PIECES_PER_SIDE {
                return Err(BoardError::PieceCount { side, got });
            }
        }
        Ok(self)
    }

    #[inline(always)]
    pub fn get(&self, cell: Cell) -> Option<Side> {
        self.cells[cell.index()]
    }

    #[inline(always)]
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.cells[cell.index()].is_none()
    }

    /// Positions of `side`'s pieces in row-major order.
    pub fn pieces(&self, side: Side) -> Vec<Cell> {
        let mut out = Vec::with_capacity(PIECES_PER_SIDE);
        for (idx, marker) in self.cells.iter().enumerate() {
            if *marker == Some(side) {
                out.push(Cell::from_index(idx));
                if out.len() == PIECES_PER_SIDE {
                    break;
                }
            }
        }
        out
    }

    pub fn count(&self, side: Side) -> usize {
        self.cells.iter().filter(|&&m| m == Some(side)).count()
    }

    /// Moves the piece on `from` to the empty cell `to`.
    ///
    /// The caller guarantees `from` is occupied and `to` is empty.
    #[inline]
    pub fn relocate(&mut self, from: Cell, to: Cell) {
        debug_assert!(self.get(from).is_some(), "no piece on {from}");
        debug_assert!(self.is_empty(to), "{to} is occupied");
        self.cells.swap(from.index(), to.index());
    }

    /// Applies a step or a whole jump chain. Only the endpoints change.
    pub fn apply(&mut self, mv: &Move) {
        if mv.from() != mv.to() {
            self.relocate(mv.from(), mv.to());
        }
    }

    /// Returns a copy with `mv` applied.
    pub fn with_move(&self, mv: &Move) -> Self {
        let mut next = self.clone();
        next.apply(mv);
        next
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_SIZE as usize {
            for x in 0..BOARD_SIZE as usize {
                let c = match self.cells[y * BOARD_SIZE as usize + x] {
                    Some(side) => side.symbol(),
                    None => '.',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BoardState")?;
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
