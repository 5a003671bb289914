use std::fmt;

use maze_core::{Grid, Point};

/// A move between orthogonally adjacent cells.
///
/// [`Action::ALL`] is the canonical order used to break ties between
/// equally good actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// Unit offset of the move.
    #[inline]
    pub const fn offset(self) -> Point {
        Point::CARDINALS[self as usize]
    }

    /// One-letter symbol (`U`, `D`, `L`, `R`).
    pub const fn symbol(self) -> char {
        match self {
            Action::Up => 'U',
            Action::Down => 'D',
            Action::Left => 'L',
            Action::Right => 'R',
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Deterministic transition: the target cell if it is in bounds and open,
/// otherwise `p` itself.
#[inline]
pub fn next_state(grid: &Grid, p: Point, a: Action) -> Point {
    let n = p + a.offset();
    if grid.is_open(n) { n } else { p }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_follow_canonical_order() {
        assert_eq!(Action::Up.offset(), Point::new(0, -1));
        assert_eq!(Action::Down.offset(), Point::new(0, 1));
        assert_eq!(Action::Left.offset(), Point::new(-1, 0));
        assert_eq!(Action::Right.offset(), Point::new(1, 0));
        let s: String = Action::ALL.iter().map(|a| a.symbol()).collect();
        assert_eq!(s, "UDLR");
    }

    #[test]
    fn blocked_moves_self_loop() {
        let g = Grid::parse(
            "
            ###
            #.#
            ###
            ",
        )
        .unwrap();
        let p = Point::at(1, 1);
        for a in Action::ALL {
            assert_eq!(next_state(&g, p, a), p);
        }
    }

    #[test]
    fn open_moves_step() {
        let g = Grid::parse(
            "
            ####
            #..#
            ####
            ",
        )
        .unwrap();
        assert_eq!(next_state(&g, Point::at(1, 1), Action::Right), Point::at(1, 2));
        assert_eq!(next_state(&g, Point::at(1, 2), Action::Right), Point::at(1, 2));
    }
}
