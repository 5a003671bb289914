use std::collections::BinaryHeap;

use maze_core::{Grid, Metrics, Point, Stopwatch, predecessors};

use crate::distance::manhattan;
use crate::search::{Tally, endpoints};

/// Best-known cost for a cell that has not been reached yet.
const UNSEEN: i32 = i32::MAX;

/// Heap entry: smallest `f` first, then smallest `h` (deepest `g`), then
/// lowest flat index, so the pop order never depends on heap internals.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    f: i32,
    h: i32,
}

impl NodeRef {
    fn new(idx: usize, g: i32, h: i32) -> Self {
        Self { idx, f: g + h, h }
    }
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed: BinaryHeap is a max-heap.
        (other.f, other.h, other.idx).cmp(&(self.f, self.h, self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Solve the maze with A* using the Manhattan distance to the goal.
///
/// Relaxation is lazy: there is no closed set. A neighbour is pushed when
/// it is first reached or when its best-known `g` strictly improves, so a
/// cell may sit in the heap several times and every pop, stale or not, is
/// expanded and counted in `states_expanded`. The returned path is still
/// optimal because predecessors only change on a strict improvement.
///
/// Entries with equal `f` pop closest-to-goal first, then by flat index.
pub fn solve_astar(grid: &Grid) -> (Vec<Point>, Metrics) {
    let watch = Stopwatch::start();
    let Some((si, gi)) = endpoints(grid) else {
        return (Vec::new(), Metrics::default());
    };
    let goal = grid.goal();

    let mut preds = predecessors(grid);
    let mut best_g = vec![UNSEEN; grid.len()];
    best_g[si] = 0;

    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    open.push(NodeRef::new(si, 0, manhattan(grid.start(), goal)));

    let mut tally = Tally::start(watch);
    let mut nbuf = Vec::with_capacity(4);

    while let Some(current) = open.pop() {
        tally.expanded += 1;
        let ci = current.idx;
        if ci == gi {
            break;
        }

        let current_g = best_g[ci];
        nbuf.clear();
        grid.neighbors(grid.point(ci), &mut nbuf);
        for &np in nbuf.iter() {
            let Some(ni) = grid.idx(np) else {
                continue;
            };
            let tentative_g = current_g + 1;
            if tentative_g >= best_g[ni] {
                continue;
            }
            best_g[ni] = tentative_g;
            preds[ni] = ci;
            open.push(NodeRef::new(ni, tentative_g, manhattan(np, goal)));
        }
        tally.observe(open.len());
    }

    tally.finish("astar", grid, &preds)
}
