#![no_main]
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;
use sightline::chess::board::Board;
use sightline::chess::core::{Player, Square};
use sightline::ffi::check_raw;
use sightline::{is_legal_move, Error};

// First 5 bytes are coordinates and the side to move, the rest is the board.
fuzz_target!(|data: &[u8]| {
    let Some((header, cells)) = data.split_first_chunk::<5>() else {
        return;
    };
    let [from_row, from_col, to_row, to_col, side] = header.map(|byte| i64::from(byte as i8));
    let is_white = side % 2 == 0;
    let result = check_raw(cells, from_row, from_col, to_row, to_col, is_white);
    match (Board::from_cells(cells), Square::from_row_col(from_row, from_col), Square::from_row_col(to_row, to_col)) {
        (Ok(board), Ok(from), Ok(to)) => {
            assert_eq!(
                result,
                Ok(is_legal_move(&board, from, to, Player::from_is_white(is_white)))
            );
            // Decoding is lossless for accepted buffers.
            assert_eq!(&board.to_cells()[..], &cells[..64]);
        },
        (Err(e), _, _) => assert_eq!(result, Err(e)),
        (Ok(_), Err(e), _) | (Ok(_), Ok(_), Err(e)) => {
            assert!(matches!(e, Error::InvalidSquare { .. }));
            assert_eq!(result, Err(e));
        },
    }
});
