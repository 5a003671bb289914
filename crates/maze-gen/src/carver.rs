//! Randomized depth-first carving with loop injection.
//!
//! Carving grows a single-width passage tree out of an all-wall grid:
//! a wall is only opened when exactly one of its neighbours is already
//! open, so no cycles and no two-cell-wide corridors can appear. Loops are
//! added afterwards by [`MazeGen::add_loops`].

use maze_core::{Cell, Grid, Point};
use maze_paths::is_reachable;
use rand::Rng;

use crate::config::GenConfig;

/// Maze generator operating on a [`Grid`] with an explicit random source.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub grid: Grid,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new MazeGen with the given grid.
    pub fn with_grid(grid: Grid, rng: R) -> Self {
        Self { rng, grid }
    }

    /// Give back the grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Carve passages from the start, then force the goal open.
    ///
    /// The goal is opened even when carving never reached it, which can
    /// leave it cut off from every carved cell; check [`is_solvable`] and
    /// retry with [`make_solvable`] before solving.
    ///
    /// Returns the number of cells opened by carving (the forced goal is
    /// not counted).
    ///
    /// [`is_solvable`]: Self::is_solvable
    /// [`make_solvable`]: Self::make_solvable
    pub fn carve(&mut self) -> usize {
        let opened = self.carve_passages();
        let goal = self.grid.goal();
        if self.grid.contains(goal) {
            self.grid.set(goal, Cell::Open);
        }
        log::debug!(
            "carved {opened} cells in {}x{}, goal reached: {}",
            self.grid.rows(),
            self.grid.cols(),
            self.is_solvable()
        );
        opened
    }

    /// The carving walk without the goal fix-up.
    pub(crate) fn carve_passages(&mut self) -> usize {
        let start = self.grid.start();
        let Some(si) = self.grid.idx(start) else {
            return 0;
        };

        let mut visited = vec![false; self.grid.len()];
        let mut opened = 0usize;
        if !self.grid.is_open(start) {
            self.grid.set(start, Cell::Open);
            opened += 1;
        }
        visited[si] = true;

        let mut stack: Vec<Point> = vec![start];
        let mut candidates: Vec<Point> = Vec::with_capacity(4);

        while let Some(&top) = stack.last() {
            candidates.clear();
            for n in top.neighbors_4() {
                if !self.grid.is_interior(n) {
                    continue;
                }
                let Some(ni) = self.grid.idx(n) else {
                    continue;
                };
                if !visited[ni]
                    && self.grid.at(n) == Some(Cell::Wall)
                    && self.grid.count_open_neighbors(n) == 1
                {
                    candidates.push(n);
                }
            }

            if candidates.is_empty() {
                stack.pop();
                continue;
            }

            let next = candidates[self.rng.random_range(0..candidates.len())];
            self.grid.set(next, Cell::Open);
            if let Some(ni) = self.grid.idx(next) {
                visited[ni] = true;
            }
            opened += 1;
            stack.push(next);
        }

        opened
    }

    /// Open each interior wall independently with probability `p`.
    ///
    /// Only ever turns walls into open cells, so existing passages and
    /// their connectivity survive. `p <= 0` opens nothing and `p >= 1`
    /// opens every interior wall. Returns the number of cells opened.
    pub fn add_loops(&mut self, p: f64) -> usize {
        let mut opened = 0;
        for pt in self.grid.bounds().inner() {
            if self.grid.at(pt) == Some(Cell::Wall) && self.rng.random::<f64>() < p {
                self.grid.set(pt, Cell::Open);
                opened += 1;
            }
        }
        log::trace!("add_loops({p}) opened {opened} cells");
        opened
    }

    /// Force the border to walls. Meant for display and export views.
    pub fn seal_outer_walls(&mut self) {
        self.grid.seal_outer_walls();
    }

    /// Whether the goal can be reached from the start.
    pub fn is_solvable(&self) -> bool {
        is_reachable(&self.grid, self.grid.start(), self.grid.goal())
    }

    /// Add loops with `config.retry_loop_probability` until the goal is
    /// reachable, at most `config.max_retries` times.
    ///
    /// Returns the final reachability. A `false` result means the maze
    /// must be treated as unsolvable.
    pub fn make_solvable(&mut self, config: &GenConfig) -> bool {
        let mut attempts = 0;
        while !self.is_solvable() && attempts < config.max_retries {
            let opened = self.add_loops(config.retry_loop_probability);
            attempts += 1;
            log::debug!("solvability retry {attempts}: opened {opened} cells");
        }
        let solvable = self.is_solvable();
        if !solvable {
            log::warn!(
                "{}x{} maze still unsolvable after {attempts} retries",
                self.grid.rows(),
                self.grid.cols()
            );
        }
        solvable
    }
}
