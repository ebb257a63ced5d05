//! Engine-versus-engine games checking rule invariants after every ply.

use checkers_engine::board::{Board, Color, Engine, SearchConfig};

const MAX_PLIES: usize = 150;

/// Play two engines against each other; returns the winner, if any.
fn self_play(white_depth: i32, black_depth: i32) -> Option<Color> {
    let white = Engine::with_config(Color::White, SearchConfig::with_depth(white_depth)).unwrap();
    let black = Engine::with_config(Color::Black, SearchConfig::with_depth(black_depth)).unwrap();
    let mut board = Board::starting_position(Color::White);
    let mut to_move = Color::White;

    for _ in 0..MAX_PLIES {
        if let Some(winner) = board.winner().unwrap() {
            return Some(winner);
        }
        let engine = if to_move == Color::White { &white } else { &black };
        let Some(mv) = engine.find_best_move(&board).unwrap() else {
            return Some(to_move.opponent());
        };

        let before = board.len();
        let outcome = board.apply(&mv).unwrap();
        assert_eq!(outcome.captured.is_some(), mv.is_capture());
        assert_eq!(board.len() + usize::from(mv.is_capture()), before);
        assert!(board.count(Color::White) <= 12 && board.count(Color::Black) <= 12);

        to_move = to_move.opponent();
    }
    None
}

#[test]
fn self_play_keeps_invariants() {
    // The outcome itself is not asserted; every ply is checked inside.
    let _ = self_play(2, 2);
}

#[test]
fn self_play_is_reproducible() {
    assert_eq!(self_play(2, 1), self_play(2, 1));
}

#[test]
fn engines_of_both_colors_find_opening_moves() {
    let board = Board::starting_position(Color::Black);
    for color in Color::BOTH {
        let engine = Engine::new(color);
        let mv = engine.find_best_move(&board).unwrap().unwrap();
        assert_eq!(board.piece_at(mv.from).map(|p| p.color()), Some(color));
        assert!(!board.has_piece(mv.to));
    }
}
