//! Markov-decision-process planners for grid mazes.
//!
//! The maze is a deterministic MDP: states are open cells, the four
//! [`Action`]s move one cell, blocked moves leave the agent in place, every
//! move costs one unit of reward and the goal is absorbing with value 0.
//!
//! [`solve_value_iteration`] and [`solve_policy_iteration`] both return a
//! [`Plan`] holding a [`ValueTable`] and a [`Policy`]. A path is read off
//! the policy with [`extract_path`], and [`Plan::metrics`] produces the same
//! [`Metrics`](maze_core::Metrics) record the search solvers report.

mod action;
mod bellman;
mod config;
mod plan;
mod policy_iteration;
mod table;
mod value_iteration;

pub use action::{Action, next_state};
pub use bellman::STEP_REWARD;
pub use config::{ConfigError, PlannerConfig};
pub use plan::{DEFAULT_MAX_STEPS, Plan, Planner, extract_path};
pub use policy_iteration::solve_policy_iteration;
pub use table::{Policy, UNREACHABLE_VALUE, ValueTable};
pub use value_iteration::solve_value_iteration;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planner_dispatch() {
        let g = fixtures::detour();
        let cfg = PlannerConfig::default();
        for planner in Planner::ALL {
            let plan = planner.solve(&g, &cfg);
            let path = plan.path(&g);
            let m = plan.metrics(&path);
            assert_eq!(m.path_length, fixtures::DETOUR_SHORTEST, "{planner}");
            assert_eq!(m.peak_memory_proxy, g.len());
            assert_eq!(m.states_expanded, plan.states_expanded);
            assert!(m.runtime >= 0.0);
        }
        assert_eq!(Planner::PolicyIteration.to_string(), "Policy Iteration");
    }

    #[test]
    fn long_corridor_keeps_its_direction() {
        // Action gaps near the far end are around 1e-14.
        let g = fixtures::corridor(300);
        let cfg = PlannerConfig::default();
        for planner in Planner::ALL {
            let plan = planner.solve(&g, &cfg);
            let path = plan.path(&g);
            fixtures::assert_valid_path(&g, &path);
            assert_eq!(path.len(), 300, "{planner}");
            assert_eq!(plan.policy.get(g.start()), Some(Action::Right), "{planner}");
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trips() {
        let cfg = PlannerConfig {
            gamma: 0.5,
            ..PlannerConfig::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: PlannerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn policy_serializes_actions() {
        let g = fixtures::open_room();
        let plan = solve_value_iteration(&g, &PlannerConfig::default());
        let json = serde_json::to_value(&plan.policy).unwrap();
        assert!(json["actions"].as_array().unwrap().iter().any(|a| a == "Down"));
    }
}
