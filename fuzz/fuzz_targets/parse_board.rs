#![no_main]
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;
use sightline::chess::board::Board;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(board) = Board::try_from(s) {
            // Printing the placement back should produce an equivalent board.
            assert_eq!(Board::try_from(board.to_string().as_str()).ok(), Some(board));
        }
    }
});
