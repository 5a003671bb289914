use thiserror::Error;

use crate::geom::Point;

/// Errors raised while building a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Either side is below [`MIN_SIDE`](crate::grid::MIN_SIDE).
    #[error("grid {rows}x{cols} is too small: start and goal need at least a 3x3 grid")]
    TooSmall { rows: i32, cols: i32 },
    /// `rows * cols` does not fit the cell index type.
    #[error("grid {rows}x{cols} is too large")]
    TooLarge { rows: i32, cols: i32 },
    /// A decoded grid holds a different number of cells than its sides imply.
    #[error("grid has {found} cells, expected {expected}")]
    CellCount { expected: usize, found: usize },
    /// A picture line has a different width than the first one.
    #[error("line {line} has width {found}, expected {expected}")]
    Ragged {
        line: usize,
        expected: i32,
        found: i32,
    },
    /// A picture contains a character other than `#`, `.`, `S` or `G`.
    #[error("invalid character \u{201c}{ch}\u{201d} at {pos}")]
    InvalidChar { ch: char, pos: Point },
    #[error("empty grid picture")]
    Empty,
}
