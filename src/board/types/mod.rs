//! Core checkers types.
//!
//! - `Color` and `Piece` - piece colors and the men/kings themselves
//! - `Square` - one of the 32 playable dark squares
//! - `Direction` - the four diagonals in enumeration order
//! - `Move` - fixed-shape move descriptor

mod moves;
mod piece;
mod square;

pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::{Direction, Square};
