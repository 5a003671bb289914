//! Shared plumbing for the frontier-based solvers.

use std::fmt;

use maze_core::{Grid, Metrics, Point, Stopwatch, reconstruct_path};

use crate::{solve_astar, solve_bfs, solve_dfs};

/// A frontier-based maze solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Dfs,
    Bfs,
    AStar,
}

impl Algorithm {
    /// Every search algorithm, in reporting order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Dfs, Algorithm::Bfs, Algorithm::AStar];

    /// Short display name, as used in experiment reports.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Dfs => "DFS",
            Algorithm::Bfs => "BFS",
            Algorithm::AStar => "A*",
        }
    }

    /// Run the algorithm between the grid's start and goal.
    pub fn solve(self, grid: &Grid) -> (Vec<Point>, Metrics) {
        match self {
            Algorithm::Dfs => solve_dfs(grid),
            Algorithm::Bfs => solve_bfs(grid),
            Algorithm::AStar => solve_astar(grid),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Flat indices of the start and goal, or `None` when either is out of
/// bounds or a wall. Solvers return an empty path and zeroed metrics in
/// that case without searching.
pub(crate) fn endpoints(grid: &Grid) -> Option<(usize, usize)> {
    let (start, goal) = (grid.start(), grid.goal());
    if !grid.is_open(start) || !grid.is_open(goal) {
        return None;
    }
    Some((grid.idx(start)?, grid.idx(goal)?))
}

/// Counters a solver accumulates while its frontier is alive.
#[derive(Debug)]
pub(crate) struct Tally {
    watch: Stopwatch,
    pub(crate) expanded: usize,
    pub(crate) peak: usize,
}

impl Tally {
    /// Start timing with a frontier that already holds the start cell.
    pub(crate) fn start(watch: Stopwatch) -> Self {
        Self {
            watch,
            expanded: 0,
            peak: 1,
        }
    }

    #[inline]
    pub(crate) fn observe(&mut self, frontier_len: usize) {
        self.peak = self.peak.max(frontier_len);
    }

    /// Rebuild the path and close the metrics record.
    pub(crate) fn finish(self, name: &str, grid: &Grid, preds: &[usize]) -> (Vec<Point>, Metrics) {
        let path = reconstruct_path(grid, preds, grid.start(), grid.goal());
        let metrics = Metrics {
            runtime: self.watch.seconds(),
            states_expanded: self.expanded,
            peak_memory_proxy: self.peak,
            path_length: path.len(),
        };
        log::debug!(
            "{name}: {}x{} expanded={} peak={} path={}",
            grid.rows(),
            grid.cols(),
            metrics.states_expanded,
            metrics.peak_memory_proxy,
            metrics.path_length
        );
        (path, metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn endpoints_guard() {
        let g = fixtures::open_room();
        assert!(endpoints(&g).is_some());

        let walled = g.clone().with_endpoints(Point::at(0, 0), g.goal());
        assert!(endpoints(&walled).is_none());

        let outside = g.clone().with_endpoints(g.start(), Point::at(5, 5));
        assert!(endpoints(&outside).is_none());
    }

    #[test]
    fn algorithm_dispatch_matches_free_functions() {
        let g = fixtures::loop_maze();
        for alg in Algorithm::ALL {
            let (path, _) = alg.solve(&g);
            let (expected, _) = match alg {
                Algorithm::Dfs => solve_dfs(&g),
                Algorithm::Bfs => solve_bfs(&g),
                Algorithm::AStar => solve_astar(&g),
            };
            assert_eq!(path.len(), expected.len(), "{alg}");
        }
        assert_eq!(Algorithm::AStar.to_string(), "A*");
    }
}
