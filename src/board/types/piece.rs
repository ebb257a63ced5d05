//! Piece and color types.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::board::error::{BoardError, PieceParseError};

/// Checkers colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Descriptor character ('W' or 'B')
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }

    #[must_use]
    pub fn from_char(c: char) -> Option<Color> {
        match c.to_ascii_uppercase() {
            'W' => Some(Color::White),
            'B' => Some(Color::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A single checker.
///
/// The position is kept as a raw integer so that a piece built from a bad
/// descriptor still exists; move generation rejects it with
/// [`BoardError::InvalidPosition`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    position: i32,
    color: Color,
    king: bool,
}

impl Piece {
    #[must_use]
    pub const fn new(position: i32, color: Color) -> Self {
        Piece {
            position,
            color,
            king: false,
        }
    }

    #[must_use]
    pub const fn king(position: i32, color: Color) -> Self {
        Piece {
            position,
            color,
            king: true,
        }
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> i32 {
        self.position
    }

    /// The piece's square, or `InvalidPosition` if it sits off the board.
    #[inline]
    pub fn square(&self) -> Result<Square, BoardError> {
        Square::new(self.position)
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn is_king(&self) -> bool {
        self.king
    }

    pub fn set_king(&mut self, king: bool) {
        self.king = king;
    }

    pub(crate) fn set_square(&mut self, square: Square) {
        self.position = i32::from(square);
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let king = if self.king { 'Y' } else { 'N' };
        write!(f, "{}{}{}", self.position, self.color.to_char(), king)
    }
}

impl FromStr for Piece {
    type Err = PieceParseError;

    /// Parse a compact descriptor such as `"12WN"` or `"5BY"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() < 3 {
            return Err(PieceParseError::TooShort { found: chars.len() });
        }

        let king_flag = chars[chars.len() - 1];
        let color_flag = chars[chars.len() - 2];
        let position_str: String = chars[..chars.len() - 2].iter().collect();

        let color = Color::from_char(color_flag)
            .ok_or(PieceParseError::InvalidColor { char: color_flag })?;
        let king = match king_flag.to_ascii_uppercase() {
            'Y' => true,
            'N' => false,
            _ => return Err(PieceParseError::InvalidKingFlag { char: king_flag }),
        };
        let position = position_str
            .parse::<i32>()
            .map_err(|_| PieceParseError::InvalidPosition {
                found: position_str.clone(),
            })?;

        Ok(Piece {
            position,
            color,
            king,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_man() {
        let piece: Piece = "12WN".parse().unwrap();
        assert_eq!(piece.position(), 12);
        assert_eq!(piece.color(), Color::White);
        assert!(!piece.is_king());
    }

    #[test]
    fn test_parse_king() {
        let piece: Piece = "5BY".parse().unwrap();
        assert_eq!(piece, Piece::king(5, Color::Black));
    }

    #[test]
    fn test_parse_keeps_out_of_range_position() {
        let piece: Piece = "-1WN".parse().unwrap();
        assert_eq!(piece.position(), -1);
        assert!(piece.square().is_err());

        let piece: Piece = "99BN".parse().unwrap();
        assert_eq!(piece.square(), Err(BoardError::InvalidPosition { position: 99 }));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("WN".parse::<Piece>(), Err(PieceParseError::TooShort { found: 2 }));
        assert_eq!(
            "12XN".parse::<Piece>(),
            Err(PieceParseError::InvalidColor { char: 'X' })
        );
        assert_eq!(
            "12WQ".parse::<Piece>(),
            Err(PieceParseError::InvalidKingFlag { char: 'Q' })
        );
        assert_eq!(
            "a2WN".parse::<Piece>(),
            Err(PieceParseError::InvalidPosition {
                found: "a2".to_string()
            })
        );
    }

    #[test]
    fn test_display_matches_descriptor() {
        for desc in ["0WN", "31BY", "17BN"] {
            let piece: Piece = desc.parse().unwrap();
            assert_eq!(piece.to_string(), desc);
        }
    }

    #[test]
    fn test_set_king() {
        let mut piece = Piece::new(28, Color::White);
        piece.set_king(true);
        assert!(piece.is_king());
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(Color::Black.opponent(), Color::White);
    }
}
