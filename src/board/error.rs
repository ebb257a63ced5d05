//! Error types for checkers board operations.

use std::fmt;

use super::state::PieceId;
use super::types::Square;

/// Error type for rule-engine failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A piece sits on a position outside 0-31
    InvalidPosition { position: i32 },
    /// Destination passed to `move_piece` is outside 0-31
    OutOfRange { destination: i32 },
    /// Destination already holds a piece
    Occupied { square: Square },
    /// No live piece has this id (never existed or already captured)
    NoSuchPiece { id: PieceId },
    /// A move names an origin square with no piece on it
    NoPieceAt { square: Square },
    /// Row/column pair is off the board or names a light square
    InvalidCoordinates { row: i32, column: i32 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidPosition { position } => {
                write!(f, "Invalid position {position} (must be 0-31)")
            }
            BoardError::OutOfRange { destination } => {
                write!(f, "Destination {destination} out of range (must be 0-31)")
            }
            BoardError::Occupied { square } => {
                write!(f, "Square {square} is already occupied")
            }
            BoardError::NoSuchPiece { id } => {
                write!(f, "No piece with id {id}")
            }
            BoardError::NoPieceAt { square } => {
                write!(f, "No piece on square {square}")
            }
            BoardError::InvalidCoordinates { row, column } => {
                write!(f, "({row}, {column}) is not a playable square")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for piece descriptor parsing failures (e.g. `"12WN"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieceParseError {
    /// Descriptor needs at least a position digit plus color and king flags
    TooShort { found: usize },
    /// Color flag must be 'W' or 'B'
    InvalidColor { char: char },
    /// King flag must be 'Y' or 'N'
    InvalidKingFlag { char: char },
    /// Position part is not an integer
    InvalidPosition { found: String },
}

impl fmt::Display for PieceParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceParseError::TooShort { found } => {
                write!(f, "Piece descriptor must have at least 3 characters, found {found}")
            }
            PieceParseError::InvalidColor { char } => {
                write!(f, "Invalid color '{char}', expected 'W' or 'B'")
            }
            PieceParseError::InvalidKingFlag { char } => {
                write!(f, "Invalid king flag '{char}', expected 'Y' or 'N'")
            }
            PieceParseError::InvalidPosition { found } => {
                write!(f, "Invalid position '{found}' in piece descriptor")
            }
        }
    }
}

impl std::error::Error for PieceParseError {}

/// Error type for rejected search configurations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NonPositiveManValue { value: i32 },
    KingNotAboveMan { king: i32, man: i32 },
    /// Kings are worth so much that fewer pieces could outscore more
    KingOutweighsMaterial { king: i32, man: i32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveManValue { value } => {
                write!(f, "Man value must be positive, found {value}")
            }
            ConfigError::KingNotAboveMan { king, man } => {
                write!(f, "King value {king} must exceed man value {man}")
            }
            ConfigError::KingOutweighsMaterial { king, man } => {
                write!(f, "King value {king} too large for man value {man}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_position_message() {
        let err = BoardError::InvalidPosition { position: 32 };
        assert!(err.to_string().contains("32"));
    }

    #[test]
    fn test_out_of_range_message() {
        let err = BoardError::OutOfRange { destination: -1 };
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn test_occupied_message() {
        let err = BoardError::Occupied {
            square: Square::new(17).unwrap(),
        };
        assert!(err.to_string().contains("17"));
    }

    #[test]
    fn test_parse_error_invalid_color() {
        let err = PieceParseError::InvalidColor { char: 'x' };
        assert!(err.to_string().contains("'x'"));
    }

    #[test]
    fn test_config_error_message() {
        let err = ConfigError::KingNotAboveMan { king: 90, man: 100 };
        let msg = err.to_string();
        assert!(msg.contains("90"));
        assert!(msg.contains("100"));
    }

    #[test]
    fn test_error_clone() {
        let err = BoardError::NoSuchPiece { id: PieceId(3) };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
