use once_cell::sync::Lazy;

use super::types::{Direction, Square};

/// `NEIGHBORS[sq][dir]`: the square one diagonal step away.
pub(crate) static NEIGHBORS: Lazy<[[Option<Square>; 4]; 32]> = Lazy::new(|| {
    let mut table = [[None; 4]; 32];
    for sq in Square::ALL {
        for dir in Direction::ALL {
            table[sq.index()][dir.index()] = sq.step(dir);
        }
    }
    table
});

/// `JUMPS[sq][dir]`: the landing square two diagonal steps away.
pub(crate) static JUMPS: Lazy<[[Option<Square>; 4]; 32]> = Lazy::new(|| {
    let mut table = [[None; 4]; 32];
    for sq in Square::ALL {
        for dir in Direction::ALL {
            table[sq.index()][dir.index()] = sq.step(dir).and_then(|mid| mid.step(dir));
        }
    }
    table
});

#[inline]
pub(crate) fn neighbor(sq: Square, dir: Direction) -> Option<Square> {
    NEIGHBORS[sq.index()][dir.index()]
}

#[inline]
pub(crate) fn jump_landing(sq: Square, dir: Direction) -> Option<Square> {
    JUMPS[sq.index()][dir.index()]
}

/// The jumped square if `to` is exactly two diagonal steps from `from`.
pub(crate) fn jumped_square(from: Square, to: Square) -> Option<Square> {
    Direction::ALL
        .into_iter()
        .find(|&dir| jump_landing(from, dir) == Some(to))
        .and_then(|dir| neighbor(from, dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(i: i32) -> Square {
        Square::new(i).unwrap()
    }

    #[test]
    fn test_neighbors_are_symmetric() {
        let opposite = |d: Direction| match d {
            Direction::UpLeft => Direction::DownRight,
            Direction::UpRight => Direction::DownLeft,
            Direction::DownLeft => Direction::UpRight,
            Direction::DownRight => Direction::UpLeft,
        };
        for from in Square::ALL {
            for dir in Direction::ALL {
                if let Some(to) = neighbor(from, dir) {
                    assert_eq!(neighbor(to, opposite(dir)), Some(from));
                }
            }
        }
    }

    #[test]
    fn test_interior_square_has_four_neighbors() {
        let count = Direction::ALL
            .iter()
            .filter(|&&d| neighbor(sq(13), d).is_some())
            .count();
        assert_eq!(count, 4);
    }

    #[test]
    fn test_jump_landing() {
        assert_eq!(jump_landing(sq(12), Direction::UpRight), Some(sq(21)));
        assert_eq!(jump_landing(sq(12), Direction::UpLeft), None);
        assert_eq!(jump_landing(sq(21), Direction::DownLeft), Some(sq(12)));
    }

    #[test]
    fn test_jumped_square() {
        assert_eq!(jumped_square(sq(12), sq(21)), Some(sq(17)));
        assert_eq!(jumped_square(sq(21), sq(12)), Some(sq(17)));
        assert_eq!(jumped_square(sq(12), sq(17)), None);
        assert_eq!(jumped_square(sq(0), sq(31)), None);
    }
}
