use std::fmt;

use super::error::BoardError;
use super::types::{Color, Piece, Square};

/// Stable handle to a piece on a [`Board`].
///
/// Ids are slot indices into the board's arena. Removing a piece leaves a
/// tombstone, so the ids of surviving pieces never shift.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub usize);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) slots: Vec<Option<Piece>>,
    pub(crate) color_up: Color,
}

impl Board {
    /// Create a board from pieces in id order.
    ///
    /// Two pieces on the same square are rejected with `Occupied`. A piece
    /// with an out-of-range position is kept and reported when moves are
    /// generated for it. Use [`BoardBuilder`](super::BoardBuilder) to reject
    /// those upfront as well.
    pub fn new(
        pieces: impl IntoIterator<Item = Piece>,
        color_up: Color,
    ) -> Result<Self, BoardError> {
        let slots: Vec<Option<Piece>> = pieces.into_iter().map(Some).collect();
        let mut seen = [false; 32];
        for piece in slots.iter().flatten() {
            if let Ok(square) = piece.square() {
                if std::mem::replace(&mut seen[square.index()], true) {
                    return Err(BoardError::Occupied { square });
                }
            }
        }
        Ok(Board { slots, color_up })
    }

    /// Twelve men per side on the first three rows of each end.
    #[must_use]
    pub fn starting_position(color_up: Color) -> Self {
        let up = (0..12).map(|i| Piece::new(i, color_up));
        let down = (20..32).map(|i| Piece::new(i, color_up.opponent()));
        Board {
            slots: up.chain(down).map(Some).collect(),
            color_up,
        }
    }

    /// The color whose men advance toward increasing rows.
    #[inline]
    #[must_use]
    pub fn color_up(&self) -> Color {
        self.color_up
    }

    /// Row on which a man of `color` is crowned.
    #[inline]
    #[must_use]
    pub fn promotion_row(&self, color: Color) -> usize {
        if color == self.color_up {
            7
        } else {
            0
        }
    }

    /// Live pieces with their ids, in id order.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|p| (PieceId(i), p)))
    }

    /// Live pieces of one color, in id order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (PieceId, &Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color() == color)
    }

    /// The live piece with this id, if it has not been captured.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    #[must_use]
    pub fn piece_id_at(&self, square: Square) -> Option<PieceId> {
        let position = i32::from(square);
        self.pieces()
            .find(|(_, p)| p.position() == position)
            .map(|(id, _)| id)
    }

    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.piece_id_at(square).and_then(|id| self.piece(id))
    }

    #[inline]
    #[must_use]
    pub fn has_piece(&self, square: Square) -> bool {
        self.piece_id_at(square).is_some()
    }

    /// Number of live pieces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }

    #[must_use]
    pub fn kings(&self, color: Color) -> usize {
        self.pieces_of(color).filter(|(_, p)| p.is_king()).count()
    }

    pub(crate) fn remove(&mut self, id: PieceId) -> Option<Piece> {
        self.slots.get_mut(id.0).and_then(Option::take)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position(Color::White)
    }
}

/// ASCII diagram with row 7 at the top. Men are `w`/`b`, kings `W`/`B`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8).rev() {
            write!(f, "{row} ")?;
            for column in 0..8 {
                let c = match Square::from_row_column(row, column) {
                    Err(_) => ' ',
                    Ok(sq) => match self.piece_at(sq) {
                        None => '.',
                        Some(p) => {
                            let c = p.color().to_char().to_ascii_lowercase();
                            if p.is_king() {
                                c.to_ascii_uppercase()
                            } else {
                                c
                            }
                        }
                    },
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  01234567")
    }
}
