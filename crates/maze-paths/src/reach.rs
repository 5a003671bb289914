//! Reachability queries over open cells.

use std::collections::VecDeque;

use maze_core::{Grid, Point};

/// Sentinel distance for cells a [`distance_map`] never reached.
pub const UNREACHABLE: i32 = i32::MAX;

/// Report whether `b` can be reached from `a` through open cells.
///
/// Breadth-first, O(rows·cols). Returns false when either point is out of
/// bounds or a wall, and true when `a == b` is open. The grid is only
/// read, so the query can be repeated freely between generation steps.
pub fn is_reachable(grid: &Grid, a: Point, b: Point) -> bool {
    if !grid.is_open(a) || !grid.is_open(b) {
        return false;
    }
    let (Some(si), Some(gi)) = (grid.idx(a), grid.idx(b)) else {
        return false;
    };

    let mut visited = vec![false; grid.len()];
    let mut queue: VecDeque<usize> = VecDeque::new();
    visited[si] = true;
    queue.push_back(si);

    let mut nbuf = Vec::with_capacity(4);
    while let Some(ci) = queue.pop_front() {
        if ci == gi {
            return true;
        }
        nbuf.clear();
        grid.neighbors(grid.point(ci), &mut nbuf);
        for &np in nbuf.iter() {
            let Some(ni) = grid.idx(np) else {
                continue;
            };
            if !visited[ni] {
                visited[ni] = true;
                queue.push_back(ni);
            }
        }
    }
    false
}

/// Breadth-first step distances from `source` to every open cell.
///
/// Returns a flat row-major map; walls and cells in other components hold
/// [`UNREACHABLE`]. An invalid `source` leaves the whole map unreachable.
pub fn distance_map(grid: &Grid, source: Point) -> Vec<i32> {
    let mut dist = vec![UNREACHABLE; grid.len()];
    if !grid.is_open(source) {
        return dist;
    }
    let Some(si) = grid.idx(source) else {
        return dist;
    };

    let mut queue: VecDeque<usize> = VecDeque::new();
    dist[si] = 0;
    queue.push_back(si);

    let mut nbuf = Vec::with_capacity(4);
    while let Some(ci) = queue.pop_front() {
        let nd = dist[ci] + 1;
        nbuf.clear();
        grid.neighbors(grid.point(ci), &mut nbuf);
        for &np in nbuf.iter() {
            let Some(ni) = grid.idx(np) else {
                continue;
            };
            if dist[ni] != UNREACHABLE {
                continue;
            }
            dist[ni] = nd;
            queue.push_back(ni);
        }
    }
    dist
}
