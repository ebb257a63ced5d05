//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece and per-side move generation
//! - `make_move.rs` - Move application, captures and promotion
//! - `winner.rs` - Terminal state detection
//! - `search.rs` - Minimax engine behavior
//! - `proptest.rs` - Property-based tests over random games


use crate::board::{Board, Color, Piece, Square};

pub(super) fn sq(i: i32) -> Square {
    Square::new(i).unwrap()
}

/// Board from compact descriptors such as `"12WN"`.
pub(super) fn board_from(descriptors: &[&str], color_up: Color) -> Board {
    let pieces = descriptors.iter().map(|d| d.parse::<Piece>().unwrap());
    Board::new(pieces, color_up).unwrap()
}
