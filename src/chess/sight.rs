//! Line of sight for sliding pieces: walks the squares strictly between two
//! squares on the same rank, file or diagonal.

use log::debug;

use crate::chess::board::Board;
use crate::chess::core::Square;

/// How two distinct squares line up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    /// Same row or same column: rook lines.
    Straight,
    /// Equal row and column distance: bishop lines.
    Diagonal,
}

/// Classifies the line connecting two squares. Returns [`None`] for identical
/// squares and for pairs no sliding piece can connect.
#[must_use]
pub const fn alignment(from: Square, to: Square) -> Option<Alignment> {
    let row_diff = from.row().abs_diff(to.row());
    let col_diff = from.col().abs_diff(to.col());
    match (row_diff, col_diff) {
        (0, 0) => None,
        (0, _) | (_, 0) => Some(Alignment::Straight),
        _ if row_diff == col_diff => Some(Alignment::Diagonal),
        _ => None,
    }
}

/// Squares strictly between two aligned squares, in order of travel. Neither
/// endpoint is yielded.
#[derive(Clone, Debug)]
pub struct Between {
    cursor: Option<Square>,
    to: Square,
    row_step: i8,
    col_step: i8,
}

impl Iterator for Between {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        let square = self.cursor.filter(|&square| square != self.to)?;
        self.cursor = square.offset(self.row_step, self.col_step);
        Some(square)
    }
}

/// Walks from `from` towards `to` one square at a time.
///
/// ```
/// use sightline::chess::core::Square;
/// use sightline::chess::sight::between;
///
/// assert_eq!(
///     between(Square::A1, Square::D4).unwrap().collect::<Vec<_>>(),
///     vec![Square::B2, Square::C3]
/// );
/// assert!(between(Square::A1, Square::B3).is_none());
/// ```
///
/// Returns [`None`] unless the squares are distinct and share a row, a column
/// or a diagonal: stepping towards a misaligned target would never reach it.
#[must_use]
pub fn between(from: Square, to: Square) -> Option<Between> {
    if alignment(from, to).is_none() {
        return None;
    }
    let step = |from: u8, to: u8| -> i8 {
        match from.cmp(&to) {
            std::cmp::Ordering::Less => 1,
            std::cmp::Ordering::Equal => 0,
            std::cmp::Ordering::Greater => -1,
        }
    };
    let (row_step, col_step) = (step(from.row(), to.row()), step(from.col(), to.col()));
    Some(Between {
        cursor: from.offset(row_step, col_step),
        to,
        row_step,
        col_step,
    })
}

/// Checks that every square strictly between `from` and `to` is empty. The
/// endpoints are not inspected.
///
/// Misaligned (or identical) squares have no line of sight: the result is
/// `false`.
#[must_use]
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    match between(from, to) {
        Some(mut squares) => squares.all(|square| board.is_empty(square)),
        None => {
            debug!("no line of sight between {from} and {to}: squares are not aligned");
            false
        },
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    fn squares_between(from: Square, to: Square) -> Vec<Square> {
        between(from, to)
            .unwrap_or_else(|| panic!("{from} and {to} should be aligned"))
            .collect()
    }

    #[test]
    fn alignments() {
        assert_eq!(alignment(Square::A1, Square::A8), Some(Alignment::Straight));
        assert_eq!(alignment(Square::A1, Square::H1), Some(Alignment::Straight));
        assert_eq!(alignment(Square::A1, Square::H8), Some(Alignment::Diagonal));
        assert_eq!(alignment(Square::H1, Square::A8), Some(Alignment::Diagonal));
        assert_eq!(alignment(Square::E4, Square::F6), None);
        assert_eq!(alignment(Square::E4, Square::E4), None);
    }

    #[test]
    fn straight_lines() {
        assert_eq!(
            squares_between(Square::A1, Square::A8),
            vec![
                Square::A2,
                Square::A3,
                Square::A4,
                Square::A5,
                Square::A6,
                Square::A7
            ]
        );
        assert_eq!(
            squares_between(Square::H4, Square::D4),
            vec![Square::G4, Square::F4, Square::E4]
        );
    }

    #[test]
    fn diagonal_lines() {
        assert_eq!(
            squares_between(Square::H8, Square::E5),
            vec![Square::G7, Square::F6]
        );
        assert_eq!(
            squares_between(Square::B7, Square::E4),
            vec![Square::C6, Square::D5]
        );
    }

    #[test]
    fn adjacent_squares() {
        assert!(squares_between(Square::E4, Square::E5).is_empty());
        assert!(squares_between(Square::E4, Square::D3).is_empty());
    }

    #[test]
    fn misaligned_squares() {
        assert!(between(Square::B1, Square::C3).is_none());
        assert!(between(Square::A1, Square::H7).is_none());
        assert!(between(Square::D4, Square::D4).is_none());
    }

    #[test]
    fn blocked_path() {
        let mut board = Board::try_from("8/8/8/8/8/P7/8/R7").unwrap();
        assert!(!is_path_clear(&board, Square::A1, Square::A8));
        assert!(is_path_clear(&board, Square::A1, Square::A3));
        board.clear(Square::A3);
        assert!(is_path_clear(&board, Square::A1, Square::A8));
    }

    #[test]
    fn endpoints_are_not_inspected() {
        let board = Board::try_from("7b/8/8/8/8/8/8/B7").unwrap();
        assert!(is_path_clear(&board, Square::A1, Square::H8));
        assert!(is_path_clear(&board, Square::H8, Square::A1));
    }

    #[test]
    fn no_sight_without_alignment() {
        assert!(!is_path_clear(&Board::empty(), Square::B1, Square::C3));
        assert!(!is_path_clear(&Board::empty(), Square::C3, Square::C3));
    }
}
