//! Policy iteration over the cells that can reach the goal.

use maze_core::{Grid, Point, Stopwatch};
use maze_paths::{UNREACHABLE, distance_map};

use crate::action::{Action, next_state};
use crate::bellman::{STEP_REWARD, backup, greedy, is_better};
use crate::config::PlannerConfig;
use crate::plan::Plan;
use crate::table::{Policy, ValueTable};

/// Plan by alternating policy evaluation and greedy improvement.
///
/// The initial policy moves [`Action::Up`] everywhere with all values at
/// zero. Evaluation runs synchronous sweeps of the fixed-action backup
/// until the largest change is below `config.theta`; improvement then
/// switches a cell to the greedy action when it beats the current one by
/// more than a rounding margin. The loop ends on the first round without
/// a switch. There is no iteration cap, termination relies on
/// `gamma < 1`.
///
/// Only open cells that can reach the goal are planned. The rest keep
/// [`UNREACHABLE_VALUE`](crate::UNREACHABLE_VALUE) and no action, as in
/// [`solve_value_iteration`](crate::solve_value_iteration).
pub fn solve_policy_iteration(grid: &Grid, config: &PlannerConfig) -> Plan {
    let watch = Stopwatch::start();
    let goal = grid.goal();
    let gamma = config.gamma;

    let dist = distance_map(grid, goal);
    let states: Vec<Point> = grid
        .bounds()
        .iter()
        .enumerate()
        .filter(|&(i, p)| p != goal && dist[i] != UNREACHABLE)
        .map(|(_, p)| p)
        .collect();

    let mut values = ValueTable::unreachable(grid);
    let mut policy = Policy::empty(grid);
    if grid.is_open(goal) {
        values.set(goal, 0.0);
    }
    for &p in &states {
        values.set(p, 0.0);
        policy.set(p, Some(Action::Up));
    }

    let mut prev = values.clone();
    let mut expanded = 0usize;
    let mut rounds = 0usize;
    let mut total_sweeps = 0usize;

    loop {
        rounds += 1;

        // Evaluation.
        loop {
            total_sweeps += 1;
            prev.clone_from(&values);
            let mut delta = 0.0f64;
            for &p in &states {
                expanded += 1;
                let Some(a) = policy.get(p) else {
                    continue;
                };
                let v = STEP_REWARD + gamma * prev.raw(next_state(grid, p, a));
                delta = delta.max((v - prev.raw(p)).abs());
                values.set(p, v);
            }
            if delta < config.theta {
                break;
            }
        }

        // Improvement.
        let mut changed = 0usize;
        for &p in &states {
            expanded += 1;
            let Some((best, q)) = greedy(grid, &values, p, gamma) else {
                continue;
            };
            let current = policy.get(p);
            let keep = current
                .and_then(|a| backup(grid, &values, p, a, gamma))
                .is_some_and(|cq| !is_better(q, cq));
            if !keep && current != Some(best) {
                policy.set(p, Some(best));
                changed += 1;
            }
        }
        log::trace!("policy iteration round {rounds}: {changed} actions changed");
        if changed == 0 {
            break;
        }
    }

    log::debug!(
        "policy iteration on {}x{} stable after {rounds} rounds ({total_sweeps} evaluation sweeps), {expanded} evaluations",
        grid.rows(),
        grid.cols()
    );

    Plan {
        values,
        policy,
        states_expanded: expanded,
        iterations: rounds,
        converged: true,
        runtime: watch.seconds(),
    }
}
