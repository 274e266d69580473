//! Boundary with the host environment. The host owns the authoritative board
//! and hands it over as a flat buffer of 64 one-byte cells (see
//! [`Board::from_cells`]) together with the move coordinates as (row, column)
//! pairs.
//!
//! [`check_raw`] validates such input and evaluates the move. With the `ffi`
//! feature enabled (default), the same is exported through the C ABI as
//! `is_valid_move`, along with `scratch_alloc` and `scratch_free` for
//! hosts that need the module to own the memory the board is copied into
//! (e.g. WebAssembly linear memory).

use crate::chess::board::Board;
use crate::chess::core::{Player, Square};
use crate::chess::rules::is_legal_move;

/// Decodes the host input and checks the move.
///
/// ```
/// use sightline::chess::board::Board;
/// use sightline::ffi::check_raw;
/// use sightline::Error;
///
/// let cells = Board::starting().to_cells();
/// // e2-e4.
/// assert_eq!(check_raw(&cells, 6, 4, 4, 4, true), Ok(true));
/// assert_eq!(check_raw(&cells, 6, 4, 4, 4, false), Ok(false));
/// assert_eq!(
///     check_raw(&cells, 6, 4, 8, 4, true),
///     Err(Error::InvalidSquare { row: 8, col: 4 })
/// );
/// ```
///
/// # Errors
///
/// Malformed input is rejected before any rule is evaluated: see
/// [`crate::Error`].
pub fn check_raw(
    cells: &[u8],
    from_row: i64,
    from_col: i64,
    to_row: i64,
    to_col: i64,
    mover_is_white: bool,
) -> crate::Result<bool> {
    let board = Board::from_cells(cells)?;
    let from = Square::from_row_col(from_row, from_col)?;
    let to = Square::from_row_col(to_row, to_col)?;
    Ok(is_legal_move(
        &board,
        from,
        to,
        Player::from_is_white(mover_is_white),
    ))
}

/// C ABI entry point: returns whether the move is pseudo-legal. Malformed
/// input (null or short buffer, coordinates off the board, unknown cell
/// values) is reported as `false`.
///
/// # Safety
///
/// `board` must either be null or point to at least `board_len` bytes that
/// are readable and not mutated for the duration of the call.
#[cfg(feature = "ffi")]
#[no_mangle]
pub unsafe extern "C" fn is_valid_move(
    board: *const u8,
    board_len: usize,
    from_row: i32,
    from_col: i32,
    to_row: i32,
    to_col: i32,
    is_white_turn: bool,
) -> bool {
    if board.is_null() {
        log::debug!("rejected move: board buffer is null");
        return false;
    }
    // SAFETY: the caller guarantees that `board` points to `board_len`
    // readable bytes which stay untouched until we return.
    let cells = unsafe { std::slice::from_raw_parts(board, board_len) };
    match check_raw(
        cells,
        from_row.into(),
        from_col.into(),
        to_row.into(),
        to_col.into(),
        is_white_turn,
    ) {
        Ok(legal) => legal,
        Err(e) => {
            log::debug!("rejected move: {e}");
            false
        },
    }
}

/// C ABI: allocates a block of `size` bytes owned by this module. Returns null
/// for zero-sized or impossible requests and when the allocation fails.
#[cfg(feature = "ffi")]
#[no_mangle]
pub extern "C" fn scratch_alloc(size: usize) -> *mut u8 {
    match std::alloc::Layout::array::<u8>(size) {
        Ok(layout) if layout.size() != 0 => {
            // SAFETY: the layout has a non-zero size.
            unsafe { std::alloc::alloc(layout) }
        },
        _ => std::ptr::null_mut(),
    }
}

/// C ABI: releases a block obtained from [`scratch_alloc`]. Null pointers are
/// ignored.
///
/// # Safety
///
/// A non-null `ptr` must have been returned by [`scratch_alloc`] called with
/// the same `size` and must not have been released already.
#[cfg(feature = "ffi")]
#[no_mangle]
pub unsafe extern "C" fn scratch_free(ptr: *mut u8, size: usize) {
    if ptr.is_null() {
        return;
    }
    if let Ok(layout) = std::alloc::Layout::array::<u8>(size) {
        // SAFETY: the caller guarantees `ptr` was allocated by `scratch_alloc`
        // with this exact layout.
        unsafe { std::alloc::dealloc(ptr, layout) }
    }
}
