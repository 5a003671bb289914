use maze_core::GridError;
use thiserror::Error;

/// Errors raised by [`generate`](crate::generate).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("{name} must be within [0, 1], got {value}")]
    Probability { name: &'static str, value: f64 },
}
