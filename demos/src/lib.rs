//! Shared pieces of the demo binaries: running every solver on one maze and
//! turning the results into flat records for CSV or JSON export.

use std::io;

use maze_core::{Grid, Metrics, Point};
use maze_mdp::{Planner, PlannerConfig};
use maze_paths::Algorithm;
use serde::Serialize;

/// Maze sizes used by `compare` when none are given on the command line.
pub const DEFAULT_SIZES: [i32; 3] = [10, 30, 50];

/// Runs per maze size when `--runs` is not given.
pub const RUNS: u32 = 3;

/// One solver's result on one maze, as a flat experiment row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub algorithm: &'static str,
    pub maze_size: String,
    pub run: u32,
    pub runtime: f64,
    pub states_expanded: usize,
    #[serde(rename = "peak_memory")]
    pub peak_memory_proxy: usize,
    #[serde(rename = "solution_length")]
    pub path_length: usize,
}

impl Record {
    pub fn new(algorithm: &'static str, grid: &Grid, run: u32, m: &Metrics) -> Self {
        Self {
            algorithm,
            maze_size: format!("{}x{}", grid.rows(), grid.cols()),
            run,
            runtime: m.runtime,
            states_expanded: m.states_expanded,
            peak_memory_proxy: m.peak_memory_proxy,
            path_length: m.path_length,
        }
    }
}

/// Write `records` as CSV with a header row.
pub fn write_csv<W: io::Write>(out: W, records: &[Record]) -> Result<(), csv::Error> {
    let mut w = csv::Writer::from_writer(out);
    for rec in records {
        w.serialize(rec)?;
    }
    w.flush()?;
    Ok(())
}

/// Deterministic seed for run `run` of a `size`x`size` maze.
pub fn seed_for(size: i32, run: u32) -> u64 {
    ((size as u64) << 32) | u64::from(run)
}

/// A solver together with the path it found.
pub struct Outcome {
    pub algorithm: &'static str,
    pub path: Vec<Point>,
    pub metrics: Metrics,
}

/// Run the three searches and the two planners on `grid`, in that order.
pub fn solve_all(grid: &Grid, config: &PlannerConfig) -> Vec<Outcome> {
    let mut out = Vec::with_capacity(Algorithm::ALL.len() + Planner::ALL.len());
    for alg in Algorithm::ALL {
        let (path, metrics) = alg.solve(grid);
        out.push(Outcome {
            algorithm: alg.name(),
            path,
            metrics,
        });
    }
    for planner in Planner::ALL {
        let plan = planner.solve(grid, config);
        let path = plan.path(grid);
        let metrics = plan.metrics(&path);
        out.push(Outcome {
            algorithm: planner.name(),
            path,
            metrics,
        });
    }
    out
}

/// Flatten outcomes into records for one maze.
pub fn records(grid: &Grid, run: u32, outcomes: &[Outcome]) -> Vec<Record> {
    outcomes
        .iter()
        .map(|o| Record::new(o.algorithm, grid, run, &o.metrics))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_gen::{GenConfig, generate};

    #[test]
    fn seeds_differ_per_size_and_run() {
        assert_ne!(seed_for(10, 1), seed_for(10, 2));
        assert_ne!(seed_for(10, 1), seed_for(30, 1));
    }

    #[test]
    fn every_solver_reaches_the_goal() {
        let maze = (1..=RUNS)
            .map(|run| generate(15, 15, seed_for(15, run), &GenConfig::default()).unwrap())
            .find(|m| m.solvable)
            .unwrap();
        let outcomes = solve_all(&maze.grid, &PlannerConfig::default());
        assert_eq!(outcomes.len(), 5);

        let shortest = outcomes[1].metrics.path_length;
        for o in &outcomes {
            assert_eq!(o.path.last(), Some(&maze.grid.goal()), "{}", o.algorithm);
            assert_eq!(o.metrics.path_length, o.path.len());
            if o.algorithm != "DFS" {
                assert_eq!(o.metrics.path_length, shortest, "{}", o.algorithm);
            }
        }
    }

    #[test]
    fn records_flatten_metrics() {
        let maze = generate(10, 10, 7, &GenConfig::default()).unwrap();
        let outcomes = solve_all(&maze.grid, &PlannerConfig::default());
        let recs = records(&maze.grid, 2, &outcomes);
        let json = serde_json::to_value(&recs[0]).unwrap();
        assert_eq!(json["algorithm"], "DFS");
        assert_eq!(json["maze_size"], "10x10");
        assert_eq!(json["run"], 2);
        assert!(json["states_expanded"].is_u64());
        assert_eq!(json["solution_length"], outcomes[0].metrics.path_length);
    }

    #[test]
    fn csv_has_fixed_columns() {
        let grid = Grid::new(5, 5).unwrap();
        let m = Metrics {
            runtime: 0.5,
            states_expanded: 9,
            peak_memory_proxy: 4,
            path_length: 5,
        };
        let recs = [Record::new("BFS", &grid, 1, &m), Record::new("A*", &grid, 1, &m)];
        let mut buf = Vec::new();
        write_csv(&mut buf, &recs).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "algorithm,maze_size,run,runtime,states_expanded,peak_memory,solution_length"
        );
        assert_eq!(lines[1], "BFS,5x5,1,0.5,9,4,5");
        assert_eq!(lines.len(), 3);
    }
}
