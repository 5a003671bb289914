//! **maze-core**: the grid model shared by the maze generators and solvers.
//!
//! This crate provides geometry primitives, the [`Grid`] of open and wall
//! cells with its start and goal, flat predecessor arenas with
//! [`reconstruct_path`], and the [`Metrics`] record every solver returns.

pub mod error;
pub mod geom;
pub mod grid;
pub mod metrics;
pub mod path;

pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::{Cell, Grid, MIN_SIDE};
pub use metrics::{Metrics, Stopwatch};
pub use path::{NO_PARENT, predecessors, reconstruct_path};
