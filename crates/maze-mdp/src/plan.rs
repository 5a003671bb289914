use std::fmt;

use maze_core::{Grid, Metrics, Point};

use crate::action::next_state;
use crate::config::PlannerConfig;
use crate::table::{Policy, ValueTable};
use crate::{solve_policy_iteration, solve_value_iteration};

/// Step budget used by [`Plan::path`].
pub const DEFAULT_MAX_STEPS: usize = 1000;

/// Output of a planner run.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub values: ValueTable,
    pub policy: Policy,
    /// Cell evaluations across all sweeps (and improvement passes).
    pub states_expanded: usize,
    /// Sweeps for value iteration, improvement rounds for policy iteration.
    pub iterations: usize,
    /// False when value iteration stopped at `max_iter`.
    pub converged: bool,
    /// Wall-clock seconds spent planning.
    pub runtime: f64,
}

impl Plan {
    /// Follow the policy from the grid's start, see [`extract_path`].
    pub fn path(&self, grid: &Grid) -> Vec<Point> {
        extract_path(grid, &self.policy, grid.start(), grid.goal(), DEFAULT_MAX_STEPS)
    }

    /// Metrics record for this plan and a path extracted from it.
    ///
    /// The memory proxy is the size of the value table.
    pub fn metrics(&self, path: &[Point]) -> Metrics {
        Metrics {
            runtime: self.runtime,
            states_expanded: self.states_expanded,
            peak_memory_proxy: self.values.len(),
            path_length: path.len(),
        }
    }
}

/// Follow `policy` from `start` for at most `max_steps` moves.
///
/// Moves use the MDP semantics: a blocked move leaves the agent in place.
/// The walk stops at `goal`, on a cell without an action, or when the
/// action would not change the position. The result always begins with
/// `start` and ends at `goal` only if the policy leads there.
pub fn extract_path(grid: &Grid, policy: &Policy, start: Point, goal: Point, max_steps: usize) -> Vec<Point> {
    let mut path = vec![start];
    let mut current = start;
    for _ in 0..max_steps {
        if current == goal {
            break;
        }
        let Some(a) = policy.get(current) else {
            break;
        };
        let next = next_state(grid, current, a);
        if next == current {
            break;
        }
        path.push(next);
        current = next;
    }
    path
}

/// An MDP planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Planner {
    ValueIteration,
    PolicyIteration,
}

impl Planner {
    pub const ALL: [Planner; 2] = [Planner::ValueIteration, Planner::PolicyIteration];

    pub const fn name(self) -> &'static str {
        match self {
            Planner::ValueIteration => "Value Iteration",
            Planner::PolicyIteration => "Policy Iteration",
        }
    }

    pub fn solve(self, grid: &Grid, config: &PlannerConfig) -> Plan {
        match self {
            Planner::ValueIteration => solve_value_iteration(grid, config),
            Planner::PolicyIteration => solve_policy_iteration(grid, config),
        }
    }
}

impl fmt::Display for Planner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;

    fn corridor() -> Grid {
        Grid::parse(
            "
            #######
            #S...G#
            #######
            ",
        )
        .unwrap()
    }

    fn all_right(g: &Grid) -> Policy {
        let mut p = Policy::empty(g);
        for c in 1..5 {
            p.set(Point::at(1, c), Some(Action::Right));
        }
        p
    }

    #[test]
    fn follows_policy_to_goal() {
        let g = corridor();
        let path = extract_path(&g, &all_right(&g), g.start(), g.goal(), 100);
        assert_eq!(path.len(), 5);
        assert_eq!(path.last(), Some(&g.goal()));
    }

    #[test]
    fn stops_after_max_steps() {
        let g = corridor();
        let path = extract_path(&g, &all_right(&g), g.start(), g.goal(), 2);
        assert_eq!(path, vec![Point::at(1, 1), Point::at(1, 2), Point::at(1, 3)]);
    }

    #[test]
    fn stops_on_undefined_action() {
        let g = corridor();
        let mut p = all_right(&g);
        p.set(Point::at(1, 3), None);
        let path = extract_path(&g, &p, g.start(), g.goal(), 100);
        assert_eq!(path.last(), Some(&Point::at(1, 3)));
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn stops_on_blocked_move() {
        let g = corridor();
        let mut p = all_right(&g);
        p.set(Point::at(1, 2), Some(Action::Up));
        let path = extract_path(&g, &p, g.start(), g.goal(), 100);
        assert_eq!(path, vec![Point::at(1, 1), Point::at(1, 2)]);
    }

    #[test]
    fn cycling_policy_is_bounded() {
        let g = corridor();
        let mut p = all_right(&g);
        p.set(Point::at(1, 2), Some(Action::Left));
        let path = extract_path(&g, &p, g.start(), g.goal(), 10);
        assert_eq!(path.len(), 11);
        assert_ne!(path.last(), Some(&g.goal()));
    }

    #[test]
    fn start_at_goal_is_single_cell() {
        let g = corridor();
        let path = extract_path(&g, &all_right(&g), g.goal(), g.goal(), 10);
        assert_eq!(path, vec![g.goal()]);
    }
}
