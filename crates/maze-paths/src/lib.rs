//! Search algorithms for grid mazes.
//!
//! Every solver runs between the grid's start and goal and returns the path
//! together with a [`Metrics`](maze_core::Metrics) record:
//!
//! - **DFS** ([`solve_dfs`]): explicit stack, no optimality guarantee
//! - **BFS** ([`solve_bfs`]): FIFO queue, shortest path in steps
//! - **A\*** ([`solve_astar`]): Manhattan heuristic, lazy relaxation
//!
//! [`is_reachable`] and [`distance_map`] answer connectivity questions for
//! generators and planners.

mod astar;
mod bfs;
mod dfs;
mod distance;
mod reach;
mod search;

pub use astar::solve_astar;
pub use bfs::solve_bfs;
pub use dfs::solve_dfs;
pub use distance::manhattan;
pub use reach::{UNREACHABLE, distance_map, is_reachable};
pub use search::Algorithm;
