//! Implementation of the chess board snapshot and the piece movement rules.

pub mod board;
pub mod core;
pub mod rules;
pub mod sight;
