//! Move descriptor.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// A single-step move or a single jump.
///
/// `captured` is set exactly when the move is a jump, and then names the
/// square between `from` and `to`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub captured: Option<Square>,
}

impl Move {
    /// Create a simple (non-capturing) move
    #[inline]
    #[must_use]
    pub const fn simple(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            captured: None,
        }
    }

    /// Create a jump over `captured`
    #[inline]
    #[must_use]
    pub const fn capture(from: Square, captured: Square, to: Square) -> Self {
        Move {
            from,
            to,
            captured: Some(captured),
        }
    }

    /// Returns true if this move removes an opponent piece
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.captured {
            Some(_) => write!(f, "{}x{}", self.from, self.to),
            None => write!(f, "{}-{}", self.from, self.to),
        }
    }
}
