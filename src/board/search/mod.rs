//! Depth-bounded minimax search.
//!
//! The engine plays one fixed color. Every node works on its own clone of
//! the board, so the caller's board is never touched and sibling branches
//! never see each other's moves. Leaves are scored with the material
//! evaluator from the engine's perspective.

mod params;

use super::error::{BoardError, ConfigError};
use super::eval::evaluate;
use super::{Board, Color, Move};
pub use params::SearchConfig;

/// Statistics tracked during search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited below the root, leaves included
    pub nodes: u64,
}

/// Result of a search containing the best move and its score
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// None when the engine's color has no legal move
    pub best_move: Option<Move>,
    /// Minimax value of `best_move`; the static score when there is none
    pub score: i32,
    pub stats: SearchStats,
}

/// Minimax opponent for one color.
#[derive(Clone, Debug)]
pub struct Engine {
    color: Color,
    config: SearchConfig,
}

impl Engine {
    #[must_use]
    pub fn new(color: Color) -> Self {
        Engine {
            color,
            config: SearchConfig::default(),
        }
    }

    pub fn with_config(color: Color, config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Engine { color, config })
    }

    #[inline]
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Best move for the engine's color, or `None` if it cannot move.
    pub fn find_best_move(&self, board: &Board) -> Result<Option<Move>, BoardError> {
        Ok(self.search(board)?.best_move)
    }

    /// Search the root position.
    ///
    /// Captures are the only candidates when any exist. Candidates are tried
    /// in generation order and the first one with the highest value wins, so
    /// the result is reproducible.
    pub fn search(&self, board: &Board) -> Result<SearchResult, BoardError> {
        let mut stats = SearchStats::default();
        let candidates = board.legal_moves(self.color)?;

        let mut best: Option<(Move, i32)> = None;
        for mv in candidates {
            let mut child = board.clone();
            child.apply(&mv)?;
            let value = self.minimax_inner(
                &child,
                false,
                self.config.depth.saturating_sub(1),
                self.color.opponent(),
                &mut stats,
            )?;
            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((mv, value));
            }
        }

        let result = match best {
            Some((mv, score)) => SearchResult {
                best_move: Some(mv),
                score,
                stats,
            },
            None => SearchResult {
                best_move: None,
                score: evaluate(board, self.color, &self.config),
                stats,
            },
        };

        #[cfg(feature = "logging")]
        {
            match result.best_move {
                Some(mv) => log::debug!(
                    "{} plays {mv} score {} nodes {}",
                    self.color,
                    result.score,
                    result.stats.nodes
                ),
                None => log::debug!("{} has no legal move", self.color),
            }
        }

        Ok(result)
    }

    /// Minimax value of `board` with `color` to move.
    ///
    /// `maximizing` selects whether this node takes the maximum or minimum of
    /// its children. The value is always from the engine's perspective.
    /// Depths of zero or below return the static evaluation.
    pub fn minimax(
        &self,
        board: &Board,
        maximizing: bool,
        depth: i32,
        color: Color,
    ) -> Result<i32, BoardError> {
        let mut stats = SearchStats::default();
        self.minimax_inner(board, maximizing, depth, color, &mut stats)
    }

    fn minimax_inner(
        &self,
        board: &Board,
        maximizing: bool,
        depth: i32,
        color: Color,
        stats: &mut SearchStats,
    ) -> Result<i32, BoardError> {
        stats.nodes += 1;
        if depth <= 0 {
            return Ok(evaluate(board, self.color, &self.config));
        }

        let moves = board.legal_moves(color)?;
        if moves.is_empty() {
            return Ok(evaluate(board, self.color, &self.config));
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for mv in moves {
            let mut child = board.clone();
            child.apply(&mv)?;
            let value =
                self.minimax_inner(&child, !maximizing, depth - 1, color.opponent(), stats)?;
            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;

    #[test]
    fn test_with_config_validates() {
        let bad = SearchConfig {
            man_value: -1,
            ..SearchConfig::default()
        };
        assert!(Engine::with_config(Color::Black, bad).is_err());
        assert!(Engine::with_config(Color::Black, SearchConfig::with_depth(2)).is_ok());
    }

    #[test]
    fn test_minimax_depth_zero_is_static() {
        let board = Board::new(
            [Piece::new(12, Color::White), Piece::new(16, Color::Black)],
            Color::White,
        )
        .unwrap();
        let engine = Engine::new(Color::Black);
        assert_eq!(engine.minimax(&board, true, 0, Color::Black), Ok(0));
        assert_eq!(engine.minimax(&board, true, -3, Color::Black), Ok(0));
    }

    #[test]
    fn test_stats_count_nodes() {
        let board = Board::starting_position(Color::White);
        let engine = Engine::with_config(Color::White, SearchConfig::with_depth(1)).unwrap();
        let result = engine.search(&board).unwrap();
        // Depth 1: one static leaf per root move.
        assert_eq!(result.stats.nodes, 7);
    }
}
