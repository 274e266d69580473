//! Square-centric ("mailbox") board snapshot handed over by the host for a
//! single call.

use std::fmt::{self, Write};

use anyhow::bail;

use crate::chess::core::{Piece, PieceKind, Player, Square, BOARD_SIZE, BOARD_WIDTH};
use crate::error::Error;

/// Host encoding of an empty cell.
pub const EMPTY_CELL: u8 = b' ';

/// Piece placement on all 64 squares, indexed the same way as the host buffer
/// (see [`Square`]).
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    // (Possibly) occupied squares.
    squares: [Option<Piece>; BOARD_SIZE as usize],
}

impl Board {
    /// Creates a board without any pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            squares: [None; BOARD_SIZE as usize],
        }
    }

    /// Creates the starting arrangement of the standard chess variant.
    ///
    /// ```
    /// use sightline::chess::board::Board;
    ///
    /// assert_eq!(
    ///     &Board::starting().to_string(),
    ///     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
    /// );
    /// ```
    #[must_use]
    pub const fn starting() -> Self {
        const BACKRANK: [PieceKind; BOARD_WIDTH as usize] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        const WIDTH: usize = BOARD_WIDTH as usize;
        let mut result = Self::empty();
        let mut col = 0;
        while col < WIDTH {
            result.squares[col] = Some(Piece::new(Player::Black, BACKRANK[col]));
            result.squares[WIDTH + col] = Some(Piece::new(Player::Black, PieceKind::Pawn));
            result.squares[6 * WIDTH + col] = Some(Piece::new(Player::White, PieceKind::Pawn));
            result.squares[7 * WIDTH + col] = Some(Piece::new(Player::White, BACKRANK[col]));
            col += 1;
        }
        result
    }

    /// Returns the piece standing on the square, if any.
    #[must_use]
    pub const fn at(&self, square: Square) -> Option<Piece> {
        self.squares[square as usize]
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn is_empty(&self, square: Square) -> bool {
        self.at(square).is_none()
    }

    /// Places the piece on the square, replacing whatever was there.
    pub fn put(&mut self, square: Square, piece: Piece) {
        self.squares[square.index()] = Some(piece);
    }

    #[allow(missing_docs)]
    pub fn clear(&mut self, square: Square) {
        self.squares[square.index()] = None;
    }

    /// Iterates over occupied squares in buffer order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(move |square| self.at(square).map(|piece| (square, piece)))
    }

    /// Decodes the host buffer: one byte per cell in [`Square`] order,
    /// [`EMPTY_CELL`] for an empty square and piece symbols (see
    /// [`Piece::from_symbol`]) otherwise. Bytes past the 64th cell are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBuffer`] if the buffer holds fewer than 64
    /// cells and [`Error::UnrecognizedPiece`] if any cell is neither empty nor
    /// a piece.
    pub fn from_cells(cells: &[u8]) -> crate::Result<Self> {
        let Some(cells) = cells.get(..BOARD_SIZE as usize) else {
            return Err(Error::InvalidBuffer { len: cells.len() });
        };
        let mut result = Self::empty();
        for (index, &value) in cells.iter().enumerate() {
            if value == EMPTY_CELL {
                continue;
            }
            match Piece::from_symbol(value) {
                Some(piece) => result.squares[index] = Some(piece),
                None => return Err(Error::UnrecognizedPiece { index, value }),
            }
        }
        Ok(result)
    }

    /// Encodes the board the way [`Board::from_cells`] expects it.
    #[must_use]
    pub fn to_cells(&self) -> [u8; BOARD_SIZE as usize] {
        self.squares
            .map(|square| square.map_or(EMPTY_CELL, Piece::symbol))
    }

    /// Parses the piece placement part of [Forsyth-Edwards Notation] (FEN).
    /// Only the first whitespace-separated field is consumed, so a full FEN
    /// line is accepted, too.
    ///
    /// # Errors
    ///
    /// Returns [`anyhow::Error`] if the placement does not describe exactly 8
    /// ranks of exactly 8 squares each or contains unknown symbols.
    ///
    /// [Forsyth-Edwards Notation]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
    pub fn from_placement(input: &str) -> anyhow::Result<Self> {
        let Some(placement) = input.split_ascii_whitespace().next() else {
            bail!("incorrect FEN: missing pieces placement");
        };
        let mut result = Self::empty();
        // FEN starts with rank 8, which is the first row of the buffer.
        let mut row: u8 = 0;
        for rank_fen in placement.split('/') {
            if row == BOARD_WIDTH {
                bail!("incorrect FEN: expected 8 ranks, got {placement}");
            }
            let mut col: u8 = 0;
            for symbol in rank_fen.chars() {
                if col >= BOARD_WIDTH {
                    bail!("incorrect FEN: rank size should be exactly {BOARD_WIDTH}, got {rank_fen}");
                }
                match symbol {
                    '0' => bail!("increment can not be 0"),
                    '1'..='8' => {
                        col += symbol as u8 - b'0';
                        continue;
                    },
                    _ => (),
                }
                let square = Square::from_row_col(row.into(), col.into())?;
                result.put(square, Piece::try_from(symbol)?);
                col += 1;
            }
            if col != BOARD_WIDTH {
                bail!("incorrect FEN: rank size should be exactly {BOARD_WIDTH}, got {rank_fen} of length {col}");
            }
            row += 1;
        }
        if row != BOARD_WIDTH {
            bail!("incorrect FEN: there should be 8 ranks, got {placement}");
        }
        Ok(result)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl TryFrom<&str> for Board {
    type Error = anyhow::Error;

    fn try_from(input: &str) -> anyhow::Result<Self> {
        Self::from_placement(input.trim())
    }
}

impl fmt::Display for Board {
    /// Dumps the piece placement in FEN format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.squares.chunks(BOARD_WIDTH as usize).enumerate() {
            if row != 0 {
                f.write_char('/')?;
            }
            let mut empty_squares = 0;
            for cell in cells {
                match cell {
                    Some(piece) => {
                        if empty_squares != 0 {
                            write!(f, "{empty_squares}")?;
                            empty_squares = 0;
                        }
                        write!(f, "{piece}")?;
                    },
                    None => empty_squares += 1,
                }
            }
            if empty_squares != 0 {
                write!(f, "{empty_squares}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    /// Prints the board as a grid with ranks and files, '.' for empty squares.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.squares.chunks(BOARD_WIDTH as usize).enumerate() {
            write!(f, "{} ", BOARD_WIDTH as usize - row)?;
            for cell in cells {
                match cell {
                    Some(piece) => write!(f, " {piece}")?,
                    None => f.write_str(" .")?,
                }
            }
            f.write_char('\n')?;
        }
        f.write_str("   a b c d e f g h")
    }
}
