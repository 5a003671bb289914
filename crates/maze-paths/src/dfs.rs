use maze_core::{Grid, Metrics, Point, Stopwatch, predecessors};

use crate::search::{Tally, endpoints};

/// Solve the maze depth-first with an explicit stack.
///
/// Cells are marked visited when pushed, so each is enqueued at most once.
/// `states_expanded` counts pops and `peak_memory_proxy` is the largest
/// stack seen after an expansion. The returned path is not necessarily
/// the shortest one.
pub fn solve_dfs(grid: &Grid) -> (Vec<Point>, Metrics) {
    let watch = Stopwatch::start();
    let Some((si, gi)) = endpoints(grid) else {
        return (Vec::new(), Metrics::default());
    };

    let mut preds = predecessors(grid);
    let mut visited = vec![false; grid.len()];
    let mut stack = vec![si];
    visited[si] = true;

    let mut tally = Tally::start(watch);
    let mut nbuf = Vec::with_capacity(4);

    while let Some(ci) = stack.pop() {
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
                stack.push(ni);
            }
        }
        tally.observe(stack.len());
    }

    tally.finish("dfs", grid, &preds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn finds_a_valid_path() {
        let g = fixtures::loop_maze();
        let (path, m) = solve_dfs(&g);
        fixtures::assert_valid_path(&g, &path);
        assert_eq!(m.path_length, path.len());
        assert!(m.states_expanded >= 1);
        assert!(m.peak_memory_proxy >= 1);
    }

    #[test]
    fn unreachable_goal_still_expands() {
        let g = fixtures::isolated_goal();
        let (path, m) = solve_dfs(&g);
        assert!(path.is_empty());
        assert_eq!(m.path_length, 0);
        assert!(m.states_expanded > 0);
    }

    #[test]
    fn guard_returns_zeroed_metrics() {
        for g in fixtures::invalid_endpoints() {
            let (path, m) = solve_dfs(&g);
            assert!(path.is_empty());
            assert_eq!(m, Metrics::default());
        }
    }

    #[test]
    fn start_equals_goal() {
        let g = fixtures::open_room();
        let g = g.clone().with_endpoints(g.start(), g.start());
        let (path, m) = solve_dfs(&g);
        assert_eq!(path, vec![g.start()]);
        assert_eq!(m.states_expanded, 1);
        assert_eq!(m.peak_memory_proxy, 1);
    }
}
