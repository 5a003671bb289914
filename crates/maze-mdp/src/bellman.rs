//! One-step lookahead shared by both planners.

use maze_core::{Grid, Point};

use crate::action::{Action, next_state};
use crate::table::ValueTable;

/// Reward collected by every move, including blocked ones.
pub const STEP_REWARD: f64 = -1.0;

/// Action values within this many machine epsilons of each other,
/// relative to their magnitude, are ties.
const TIE_ULPS: f64 = 4.0;

/// Whether `q` beats `best` by more than rounding noise.
///
/// The margin scales with the values: far from the goal the real gaps
/// between actions shrink like `gamma^d` and must stay visible.
#[inline]
pub(crate) fn is_better(q: f64, best: f64) -> bool {
    q - best > TIE_ULPS * f64::EPSILON * q.abs().max(best.abs())
}

/// `STEP_REWARD + gamma * V(next(p, a))`, or `None` when the successor
/// holds the unreachable sentinel.
#[inline]
pub(crate) fn backup(grid: &Grid, values: &ValueTable, p: Point, a: Action, gamma: f64) -> Option<f64> {
    let v = values.raw(next_state(grid, p, a));
    v.is_finite().then(|| STEP_REWARD + gamma * v)
}

/// The best available action at `p` and its value.
///
/// Candidates are scanned in [`Action::ALL`] order and a later action only
/// wins if it [`is_better`] than the current pick.
pub(crate) fn greedy(grid: &Grid, values: &ValueTable, p: Point, gamma: f64) -> Option<(Action, f64)> {
    let mut best: Option<(Action, f64)> = None;
    for a in Action::ALL {
        let Some(q) = backup(grid, values, p, a, gamma) else {
            continue;
        };
        if best.is_none_or(|(_, b)| is_better(q, b)) {
            best = Some((a, q));
        }
    }
    best
}
