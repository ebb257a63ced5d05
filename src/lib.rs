pub mod board;

pub use board::{Board, Color, Engine, Move, Piece, PieceId, SearchConfig, Square};
