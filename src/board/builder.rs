//! Fluent builder for constructing checkers positions.
//!
//! Unlike [`Board::new`], which only rejects shared squares, the builder also
//! requires every position to lie in 0-31.
//!
//! # Example
//! ```
//! use checkers_engine::board::{BoardBuilder, Color};
//!
//! let board = BoardBuilder::new()
//!     .man(12, Color::White)
//!     .man(17, Color::Black)
//!     .king(31, Color::Black)
//!     .color_up(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.len(), 3);
//! ```

use super::error::BoardError;
use super::{Board, Color, Piece};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<Piece>,
    color_up: Color,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder with White moving up.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            color_up: Color::White,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position(color_up: Color) -> Self {
        let board = Board::starting_position(color_up);
        BoardBuilder {
            pieces: board.pieces().map(|(_, p)| *p).collect(),
            color_up,
        }
    }

    /// Add a piece. Ids follow insertion order.
    #[must_use]
    pub fn piece(mut self, piece: Piece) -> Self {
        self.pieces.push(piece);
        self
    }

    #[must_use]
    pub fn man(self, position: i32, color: Color) -> Self {
        self.piece(Piece::new(position, color))
    }

    #[must_use]
    pub fn king(self, position: i32, color: Color) -> Self {
        self.piece(Piece::king(position, color))
    }

    /// Remove whatever piece sits on `position`.
    #[must_use]
    pub fn clear(mut self, position: i32) -> Self {
        self.pieces.retain(|p| p.position() != position);
        self
    }

    /// Set which color advances toward increasing rows.
    #[must_use]
    pub const fn color_up(mut self, color: Color) -> Self {
        self.color_up = color;
        self
    }

    /// Build the board, rejecting off-board or overlapping pieces.
    pub fn build(self) -> Result<Board, BoardError> {
        for piece in &self.pieces {
            piece.square()?;
        }
        Board::new(self.pieces, self.color_up)
    }
}
