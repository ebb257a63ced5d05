//! Static material evaluation.

use super::search::SearchConfig;
use super::{Board, Color};

/// Weighted material of `color` minus that of its opponent.
///
/// Positive scores favor `color` regardless of whose turn it is.
#[must_use]
pub fn evaluate(board: &Board, color: Color, config: &SearchConfig) -> i32 {
    board.pieces().fold(0, |score, (_, piece)| {
        let value = if piece.is_king() {
            config.king_value
        } else {
            config.man_value
        };
        if piece.color() == color {
            score + value
        } else {
            score - value
        }
    })
}
