//! Square types and coordinate arithmetic.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::BoardError;

/// Number of playable squares.
pub(crate) const NUM_SQUARES: usize = 32;

/// Playable squares per row.
pub(crate) const SQUARES_PER_ROW: usize = 4;

/// One of the 32 dark squares, numbered row-major from 0 to 31.
///
/// Row `r` holds squares `4r..4r+3`. Even rows sit on actual columns
/// 0, 2, 4, 6 and odd rows on 1, 3, 5, 7, so diagonal neighbors depend on
/// row parity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i32", into = "i32"))]
pub struct Square(u8);

impl Square {
    /// All squares in index order.
    pub const ALL: [Square; NUM_SQUARES] = {
        let mut all = [Square(0); NUM_SQUARES];
        let mut i = 0;
        while i < NUM_SQUARES {
            all[i] = Square(i as u8);
            i += 1;
        }
        all
    };

    /// Create a square with bounds checking.
    pub fn new(position: i32) -> Result<Self, BoardError> {
        if (0..NUM_SQUARES as i32).contains(&position) {
            Ok(Square(position as u8))
        } else {
            Err(BoardError::InvalidPosition { position })
        }
    }

    /// Square at an actual (row, column) on the 8x8 board.
    ///
    /// Fails for coordinates off the board and for light squares.
    pub fn from_row_column(row: i32, column: i32) -> Result<Self, BoardError> {
        let on_board = (0..8).contains(&row) && (0..8).contains(&column);
        if !on_board || (row + column) % 2 != 0 {
            return Err(BoardError::InvalidCoordinates { row, column });
        }
        Ok(Square((row * SQUARES_PER_ROW as i32 + column / 2) as u8))
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Row 0-7.
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.index() / SQUARES_PER_ROW
    }

    /// Index of the square within its row, 0-3.
    #[inline]
    #[must_use]
    pub const fn column_in_row(self) -> usize {
        self.index() % SQUARES_PER_ROW
    }

    /// Actual column 0-7 on the 8x8 board.
    #[inline]
    #[must_use]
    pub const fn column(self) -> usize {
        2 * self.column_in_row() + self.row() % 2
    }

    /// The adjacent square one diagonal step away, if on the board.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Square> {
        let (dr, dc) = direction.delta();
        let row = self.row() as i32 + dr;
        let column = self.column() as i32 + dc;
        Square::from_row_column(row, column).ok()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for Square {
    type Error = BoardError;

    fn try_from(position: i32) -> Result<Self, Self::Error> {
        Square::new(position)
    }
}

impl From<Square> for i32 {
    fn from(square: Square) -> i32 {
        square.0 as i32
    }
}

/// Diagonal directions. "Up" is increasing row, "left" decreasing column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// Enumeration order used by move generation.
    pub const ALL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    pub const UP: [Direction; 2] = [Direction::UpLeft, Direction::UpRight];

    pub const DOWN: [Direction; 2] = [Direction::DownLeft, Direction::DownRight];

    /// (row, column) delta of one step.
    #[inline]
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::UpLeft => (1, -1),
            Direction::UpRight => (1, 1),
            Direction::DownLeft => (-1, -1),
            Direction::DownRight => (-1, 1),
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Direction::UpLeft => 0,
            Direction::UpRight => 1,
            Direction::DownLeft => 2,
            Direction::DownRight => 3,
        }
    }
}
