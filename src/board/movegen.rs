//! Move generation.
//!
//! Each piece looks one diagonal step in every direction it may travel. An
//! empty neighbor is a simple move; an opponent neighbor with an empty
//! landing square beyond it is a capture. Captures are mandatory, first per
//! piece and then per side.

use super::error::BoardError;
use super::tables::{jump_landing, neighbor};
use super::types::{Color, Direction, Move, Piece, Square};
use super::Board;

/// Read-only view a piece needs to generate its moves.
pub trait Occupancy {
    /// Color of the piece on `square`, if any.
    fn color_at(&self, square: Square) -> Option<Color>;

    /// The color whose men advance toward increasing rows.
    fn color_up(&self) -> Color;

    fn is_occupied(&self, square: Square) -> bool {
        self.color_at(square).is_some()
    }
}

impl Occupancy for Board {
    fn color_at(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(Piece::color)
    }

    fn color_up(&self) -> Color {
        self.color_up
    }
}

impl Piece {
    /// Directions this piece may travel, in enumeration order.
    fn directions(&self, color_up: Color) -> &'static [Direction] {
        if self.is_king() {
            &Direction::ALL
        } else if self.color() == color_up {
            &Direction::UP
        } else {
            &Direction::DOWN
        }
    }

    /// Candidate moves for this piece.
    ///
    /// Returns only captures when at least one capture exists. Fails with
    /// `InvalidPosition` if the piece itself is off the board.
    pub fn moves<B: Occupancy + ?Sized>(&self, board: &B) -> Result<Vec<Move>, BoardError> {
        let from = self.square()?;
        let mut simple = Vec::new();
        let mut captures = Vec::new();

        for &dir in self.directions(board.color_up()) {
            let Some(next) = neighbor(from, dir) else {
                continue;
            };
            match board.color_at(next) {
                None => simple.push(Move::simple(from, next)),
                Some(color) if color != self.color() => {
                    if let Some(landing) = jump_landing(from, dir) {
                        if !board.is_occupied(landing) {
                            captures.push(Move::capture(from, next, landing));
                        }
                    }
                }
                Some(_) => {}
            }
        }

        Ok(if captures.is_empty() { simple } else { captures })
    }
}

impl Board {
    /// Every legal move for `color`, in piece-id order.
    ///
    /// If any piece of `color` can capture, only captures are returned.
    pub fn legal_moves(&self, color: Color) -> Result<Vec<Move>, BoardError> {
        let mut moves = Vec::new();
        for (_, piece) in self.pieces_of(color) {
            moves.extend(piece.moves(self)?);
        }
        if moves.iter().any(Move::is_capture) {
            moves.retain(Move::is_capture);
        }
        Ok(moves)
    }

    pub fn has_legal_move(&self, color: Color) -> Result<bool, BoardError> {
        for (_, piece) in self.pieces_of(color) {
            if !piece.moves(self)?.is_empty() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// The winning color, if the game is over.
    ///
    /// A side loses when it has no pieces, or has pieces but no legal move.
    /// When both sides are in that state at once there is no winner.
    pub fn winner(&self) -> Result<Option<Color>, BoardError> {
        let white_lost = !self.has_legal_move(Color::White)?;
        let black_lost = !self.has_legal_move(Color::Black)?;
        Ok(match (white_lost, black_lost) {
            (true, false) => Some(Color::Black),
            (false, true) => Some(Color::White),
            _ => None,
        })
    }
}
