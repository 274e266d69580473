//! Errors produced when the host hands over malformed input. These are
//! reported before any chess rule is evaluated: an illegal move is not an
//! error, it is simply `false`.

use thiserror::Error;

/// Malformed boundary input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The board buffer does not hold a full board.
    #[error("board buffer should hold 64 cells, got {len}")]
    InvalidBuffer {
        /// Number of cells actually provided.
        len: usize,
    },

    /// A square coordinate lies outside of the board.
    #[error("square coordinates should be within 0..8, got ({row}, {col})")]
    InvalidSquare {
        /// Row as given by the host, 0 being rank 8.
        row: i64,
        /// Column as given by the host, 0 being file a.
        col: i64,
    },

    /// A cell holds a value that does not encode any piece.
    #[error("cell {index} holds unrecognized piece value {value:#04x}")]
    UnrecognizedPiece {
        /// Board index of the offending cell.
        index: usize,
        /// Raw value of the cell.
        value: u8,
    },
}

/// Result type alias for boundary operations.
pub type Result<T> = std::result::Result<T, Error>;
