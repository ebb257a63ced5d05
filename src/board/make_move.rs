use super::error::BoardError;
use super::state::PieceId;
use super::tables::jumped_square;
use super::types::{Move, Piece, Square};
use super::Board;

/// What a successful [`Board::move_piece`] did besides relocating the mover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// The opponent piece removed by a jump
    pub captured: Option<Piece>,
    /// True if the mover was crowned by this move
    pub promoted: bool,
}

impl Board {
    /// Move piece `id` to `destination`.
    ///
    /// A destination two diagonal steps away with an opponent piece on the
    /// midpoint is a jump and removes that piece. Landing on the far row
    /// crowns a man. Fails with `OutOfRange` for destinations outside 0-31
    /// and `Occupied` if the destination holds any piece.
    pub fn move_piece(&mut self, id: PieceId, destination: i32) -> Result<MoveOutcome, BoardError> {
        let to = Square::new(destination)
            .map_err(|_| BoardError::OutOfRange { destination })?;
        if self.has_piece(to) {
            return Err(BoardError::Occupied { square: to });
        }
        let mover = *self.piece(id).ok_or(BoardError::NoSuchPiece { id })?;
        let from = mover.square()?;

        let mut outcome = MoveOutcome::default();
        if let Some(mid) = jumped_square(from, to) {
            if let Some(victim_id) = self.piece_id_at(mid) {
                let is_opponent = self
                    .piece(victim_id)
                    .is_some_and(|p| p.color() != mover.color());
                if is_opponent {
                    outcome.captured = self.remove(victim_id);
                }
            }
        }

        let promotion_row = self.promotion_row(mover.color());
        if let Some(piece) = self.slots.get_mut(id.0).and_then(Option::as_mut) {
            piece.set_square(to);
            if !piece.is_king() && to.row() == promotion_row {
                piece.set_king(true);
                outcome.promoted = true;
            }
        }

        #[cfg(feature = "logging")]
        {
            if let Some(victim) = outcome.captured {
                log::trace!("{from}x{to} captures {victim}");
            }
            if outcome.promoted {
                log::trace!("{} crowned on {to}", mover.color());
            }
        }

        Ok(outcome)
    }

    /// Apply a move descriptor by locating the piece on `mv.from`.
    pub fn apply(&mut self, mv: &Move) -> Result<MoveOutcome, BoardError> {
        let id = self
            .piece_id_at(mv.from)
            .ok_or(BoardError::NoPieceAt { square: mv.from })?;
        self.move_piece(id, i32::from(mv.to))
    }
}
