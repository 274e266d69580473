//! Pseudo-legal chess move checker. Given a snapshot of the board, a candidate
//! move and the side claiming to move, [`is_legal_move`] tells whether the move
//! follows the movement pattern of the piece and respects board occupancy. It
//! does not look at whether the move leaves the mover's own king in check.
//!
//! The checker is a pure function: it owns no state between calls, never
//! mutates the board and can be called from any number of threads at once.
//!
//! ```
//! use sightline::chess::board::Board;
//! use sightline::chess::core::{Player, Square};
//! use sightline::is_legal_move;
//!
//! let board = Board::starting();
//! assert!(is_legal_move(&board, Square::E2, Square::E4, Player::White));
//! assert!(!is_legal_move(&board, Square::E2, Square::E5, Player::White));
//! assert!(!is_legal_move(&board, Square::E7, Square::E5, Player::White));
//! ```
//!
//! Hosts that keep the board as a flat buffer of 64 bytes go through
//! [`ffi::check_raw`] (or the exported C ABI functions), which validate the
//! buffer and the coordinates before any rule is evaluated.

// Rustc lints.
#![warn(
    absolute_paths_not_starting_with_crate,
    keyword_idents,
    macro_use_extern_crate,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_extern_crates,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]
// Rustdoc lints.
#![warn(
    rustdoc::private_doc_tests,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::bare_urls
)]
// Clippy lints.
#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
// The checker sits on the host's request path.
#![deny(clippy::perf)]

pub mod chess;
pub mod ffi;

mod error;
pub use chess::rules::is_legal_move;
pub use error::{Error, Result};
use shadow_rs::shadow;

shadow!(build);

/// Enabled cargo features. Produced by `build.rs`.
const FEATURES: &str = include_str!(concat!(env!("OUT_DIR"), "/features"));

/// Returns the full library version that can be used by the host to identify
/// which build of the module it has loaded.
#[must_use]
pub fn version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}

/// Returns the cargo features this build was compiled with, e.g. `+ffi`.
#[must_use]
pub const fn build_features() -> &'static str {
    FEATURES
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn version_mentions_package() {
        assert!(version().starts_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn features_are_recorded() {
        assert!(build_features().ends_with("ffi"));
        assert_eq!(build_features().starts_with('+'), cfg!(feature = "ffi"));
    }
}
