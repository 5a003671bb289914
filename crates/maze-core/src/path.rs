//! Predecessor arenas and path reconstruction.

use crate::geom::Point;
use crate::grid::Grid;

/// Marks a cell without a predecessor in a flat predecessor array.
pub const NO_PARENT: usize = usize::MAX;

/// A fresh predecessor array for `grid`, every entry [`NO_PARENT`].
pub fn predecessors(grid: &Grid) -> Vec<usize> {
    vec![NO_PARENT; grid.len()]
}

/// Rebuild the path from `start` to `goal` out of a predecessor array.
///
/// Walks back from `goal` until a cell with no predecessor, then reverses.
/// The result is returned only if it begins at `start`; a goal that was
/// never reached yields an empty path. When `start == goal` the path is the
/// single cell `[start]`.
pub fn reconstruct_path(grid: &Grid, preds: &[usize], start: Point, goal: Point) -> Vec<Point> {
    let Some(mut ci) = grid.idx(goal) else {
        return Vec::new();
    };
    let mut path = Vec::new();
    loop {
        path.push(grid.point(ci));
        // A cycle would mean a corrupt arena; the path can never be longer
        // than the grid.
        if path.len() > preds.len() {
            return Vec::new();
        }
        match preds.get(ci) {
            Some(&p) if p != NO_PARENT => ci = p,
            _ => break,
        }
    }
    path.reverse();
    if path.first() == Some(&start) {
        path
    } else {
        Vec::new()
    }
}
