#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::ConfigError;

/// Larger side of the closest uneven split of 32 squares (16 against 15).
const LARGER_SIDE: i32 = 16;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Plies searched, counting the engine's own move. Values below 1 only
    /// score the immediate replies statically.
    pub depth: i32,
    pub man_value: i32,
    pub king_value: i32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 3,
            man_value: 100,
            king_value: 106,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn with_depth(depth: i32) -> Self {
        SearchConfig {
            depth,
            ..SearchConfig::default()
        }
    }

    /// Check the material weights.
    ///
    /// A king must be worth more than a man, but never so much that a side
    /// with fewer pieces outscores one with more. With every piece on its
    /// own square one side holds at most 16 pieces while the other holds
    /// 15 or fewer, so `15 * king < 16 * man` is enough for any such board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.man_value <= 0 {
            return Err(ConfigError::NonPositiveManValue {
                value: self.man_value,
            });
        }
        if self.king_value <= self.man_value {
            return Err(ConfigError::KingNotAboveMan {
                king: self.king_value,
                man: self.man_value,
            });
        }
        let fewer = (LARGER_SIDE - 1).saturating_mul(self.king_value);
        let more = LARGER_SIDE.saturating_mul(self.man_value);
        if fewer >= more {
            return Err(ConfigError::KingOutweighsMaterial {
                king: self.king_value,
                man: self.man_value,
            });
        }
        Ok(())
    }
}
