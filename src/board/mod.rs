//! Checkers board representation, rules and search.
//!
//! The board holds up to 32 pieces on the dark squares of an 8x8 board.
//! Men move one square diagonally forward, kings one square in any diagonal
//! direction, and a capture jumps an adjacent opponent onto the empty square
//! beyond it. Captures are mandatory.
//!
//! # Example
//! ```
//! use checkers_engine::board::{Board, Color, Engine};
//!
//! let board = Board::starting_position(Color::White);
//! let engine = Engine::new(Color::White);
//! let best = engine.find_best_move(&board).unwrap();
//! assert!(best.is_some());
//! ```

mod builder;
mod error;
pub mod eval;
mod make_move;
mod movegen;
mod search;
mod state;
mod tables;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{BoardError, ConfigError, PieceParseError};
pub use make_move::MoveOutcome;
pub use movegen::Occupancy;
pub use search::{Engine, SearchConfig, SearchResult, SearchStats};
pub use state::{Board, PieceId};
pub use types::{Color, Direction, Move, Piece, Square};
