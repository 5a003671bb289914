//! Value iteration seeded from a backward breadth-first pass.

use maze_core::{Grid, Point, Stopwatch};
use maze_paths::{UNREACHABLE, distance_map};

use crate::bellman::greedy;
use crate::config::PlannerConfig;
use crate::plan::Plan;
use crate::table::{Policy, ValueTable};

/// Plan with synchronous value-iteration sweeps.
///
/// Values start at minus the step distance to the goal, which already
/// orders cells correctly, so sweeps only have to discount them. Cells that
/// cannot reach the goal keep [`UNREACHABLE_VALUE`](crate::UNREACHABLE_VALUE)
/// and get no action.
///
/// Sweeps stop once the largest change drops below `config.theta`, or after
/// `config.max_iter` sweeps. Hitting the cap is not an error: the plan is
/// returned with `converged == false`.
pub fn solve_value_iteration(grid: &Grid, config: &PlannerConfig) -> Plan {
    let watch = Stopwatch::start();
    let goal = grid.goal();

    let mut values = ValueTable::unreachable(grid);
    for (i, &d) in distance_map(grid, goal).iter().enumerate() {
        if d != UNREACHABLE {
            values.set(grid.point(i), -f64::from(d));
        }
    }
    if grid.is_open(goal) {
        values.set(goal, 0.0);
    }

    let states: Vec<Point> = grid
        .bounds()
        .iter()
        .filter(|&p| p != goal && grid.is_open(p))
        .collect();

    let mut policy = Policy::empty(grid);
    let mut prev = values.clone();
    let mut expanded = 0usize;
    let mut sweeps = 0usize;
    let mut converged = false;

    while sweeps < config.max_iter {
        sweeps += 1;
        prev.clone_from(&values);
        let mut delta = 0.0f64;
        for &p in &states {
            expanded += 1;
            let Some((a, q)) = greedy(grid, &prev, p, config.gamma) else {
                policy.set(p, None);
                continue;
            };
            delta = delta.max((q - prev.raw(p)).abs());
            values.set(p, q);
            policy.set(p, Some(a));
        }
        log::trace!("value iteration sweep {sweeps}: delta {delta:e}");
        if delta < config.theta {
            converged = true;
            break;
        }
    }

    if converged {
        log::debug!(
            "value iteration on {}x{} converged after {sweeps} sweeps, {expanded} evaluations",
            grid.rows(),
            grid.cols()
        );
    } else {
        log::warn!(
            "value iteration on {}x{} stopped at max_iter={} without converging",
            grid.rows(),
            grid.cols(),
            config.max_iter
        );
    }

    Plan {
        values,
        policy,
        states_expanded: expanded,
        iterations: sweeps,
        converged,
        runtime: watch.seconds(),
    }
}
