//! Error types for board parsing.

use thiserror::Error;

use crate::types::Side;

/// Errors raised while building a [`BoardState`](crate::BoardState) from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("expected 16 rows, got {got}")]
    RowCount { got: usize },

    #[error("row {row} has {got} cells, expected 16")]
    RowWidth { row: usize, got: usize },

    #[error("invalid marker '{marker}' at {x},{y} (expected 'B', 'W' or '.')")]
    InvalidMarker { marker: char, x: usize, y: usize },

    #[error("cell {x},{y} is listed for both sides")]
    Overlap { x: u8, y: u8 },

    #[error("{side} has {got} pieces, expected 19")]
    PieceCount { side: Side, got: usize },
}
