use std::collections::VecDeque;

use maze_core::{Grid, Metrics, Point, Stopwatch, predecessors};

use crate::search::{Tally, endpoints};

/// Solve the maze breadth-first with a FIFO queue.
///
/// Cells are marked visited on enqueue. `states_expanded` counts dequeues
/// and `peak_memory_proxy` is the largest queue seen after an expansion.
/// On a unit-cost grid the returned path is a shortest one.
pub fn solve_bfs(grid: &Grid) -> (Vec<Point>, Metrics) {
    let watch = Stopwatch::start();
    let Some((si, gi)) = endpoints(grid) else {
        return (Vec::new(), Metrics::default());
    };

    let mut preds = predecessors(grid);
    let mut visited = vec![false; grid.len()];
    let mut queue: VecDeque<usize> = VecDeque::new();
    visited[si] = true;
    queue.push_back(si);

    let mut tally = Tally::start(watch);
    let mut nbuf = Vec::with_capacity(4);

    while let Some(ci) = queue.pop_front() {
        tally.expanded += 1;
        if ci == gi {
            break;
        }

        nbuf.clear();
        grid.neighbors(grid.point(ci), &mut nbuf);
        for &np in nbuf.iter() {
            let Some(ni) = grid.idx(np) else {
                continue;
            };
            if !visited[ni] {
                visited[ni] = true;
                preds[ni] = ci;
                queue.push_back(ni);
            }
        }
        tally.observe(queue.len());
    }

    tally.finish("bfs", grid, &preds)
}
