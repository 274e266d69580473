//! Movement rules of each piece kind. A move is accepted when it matches the
//! movement pattern of the piece and respects board occupancy: it is
//! *pseudo-legal*. Whether the move leaves the mover's own king in check is not
//! considered, and neither are castling, en passant or promotion.

use log::trace;

use crate::chess::board::Board;
use crate::chess::core::{Move, PieceKind, Player, Square};
use crate::chess::sight::{self, Alignment};

/// Checks whether the piece on `from` may go to `to` when `mover` is the side
/// claiming the move.
///
/// The move is rejected if `from` is empty, if the piece there belongs to the
/// opponent of `mover` or if `to` is occupied by a piece of `mover`. Otherwise
/// the movement rule of the piece decides:
///
/// - Pawn: one square forward onto an empty square, two squares forward from
///   its starting row when both squares are empty, or one square diagonally
///   forward onto an opponent's piece.
/// - Knight: an "L" of two squares in one direction and one in the other, no
///   matter what stands in between.
/// - Bishop, rook and queen: any distance along their lines as long as all
///   squares in between are empty.
/// - King: one square in any direction.
///
/// ```
/// use sightline::chess::board::Board;
/// use sightline::chess::core::{Player, Square};
/// use sightline::is_legal_move;
///
/// let board = Board::try_from("4k3/8/8/8/8/8/P7/R3K3").unwrap();
/// assert!(is_legal_move(&board, Square::A1, Square::D1, Player::White));
/// // Blocked by own pawn.
/// assert!(!is_legal_move(&board, Square::A1, Square::A5, Player::White));
/// // Not White's piece.
/// assert!(!is_legal_move(&board, Square::E8, Square::E7, Player::White));
/// ```
#[must_use]
pub fn is_legal_move(board: &Board, from: Square, to: Square, mover: Player) -> bool {
    let Some(piece) = board.at(from) else {
        return false;
    };
    if piece.owner != mover {
        return false;
    }
    if board.at(to).is_some_and(|target| target.owner == mover) {
        return false;
    }
    let legal = match piece.kind {
        PieceKind::Pawn => pawn_rule(board, from, to, mover),
        PieceKind::Knight => knight_rule(from, to),
        PieceKind::Bishop => bishop_rule(board, from, to),
        PieceKind::Rook => rook_rule(board, from, to),
        PieceKind::Queen => queen_rule(board, from, to),
        PieceKind::King => king_rule(from, to),
    };
    trace!("{piece} {from}{to} for {mover}: {legal}");
    legal
}

/// Same as [`is_legal_move`] for a parsed [`Move`].
#[must_use]
pub fn is_legal(board: &Board, next_move: Move, mover: Player) -> bool {
    is_legal_move(board, next_move.from, next_move.to, mover)
}

fn distance(from: Square, to: Square) -> (u8, u8) {
    (from.row().abs_diff(to.row()), from.col().abs_diff(to.col()))
}

fn pawn_rule(board: &Board, from: Square, to: Square, player: Player) -> bool {
    let forward = i16::from(player.forward());
    let advance = i16::from(to.row()) - i16::from(from.row());
    let (_, col_diff) = distance(from, to);
    match col_diff {
        // Pushes never capture.
        0 if board.is_empty(to) => {
            advance == forward
                || (from.row() == player.pawns_starting_row()
                    && advance == 2 * forward
                    && from
                        .offset(player.forward(), 0)
                        .is_some_and(|skipped| board.is_empty(skipped)))
        },
        // Occupant is an opponent's piece: friendly targets are rejected
        // before the rules are consulted.
        1 => advance == forward && !board.is_empty(to),
        _ => false,
    }
}

fn knight_rule(from: Square, to: Square) -> bool {
    matches!(distance(from, to), (2, 1) | (1, 2))
}

fn bishop_rule(board: &Board, from: Square, to: Square) -> bool {
    sight::alignment(from, to) == Some(Alignment::Diagonal) && sight::is_path_clear(board, from, to)
}

fn rook_rule(board: &Board, from: Square, to: Square) -> bool {
    sight::alignment(from, to) == Some(Alignment::Straight) && sight::is_path_clear(board, from, to)
}

fn queen_rule(board: &Board, from: Square, to: Square) -> bool {
    sight::alignment(from, to).is_some() && sight::is_path_clear(board, from, to)
}

fn king_rule(from: Square, to: Square) -> bool {
    let (row_diff, col_diff) = distance(from, to);
    row_diff.max(col_diff) == 1
}
