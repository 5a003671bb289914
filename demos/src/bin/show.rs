//! Print one maze with the BFS path and the value-iteration path.

use clap::Parser;
use maze_gen::{GenConfig, generate};
use maze_mdp::{PlannerConfig, solve_value_iteration};
use maze_paths::solve_bfs;

#[derive(Parser, Debug)]
#[command(name = "show")]
#[command(about = "Generate a maze and draw the BFS and value-iteration paths")]
struct Args {
    /// Number of rows
    #[arg(short, long, default_value_t = 21)]
    rows: i32,

    /// Number of columns (defaults to the row count)
    #[arg(short, long)]
    cols: Option<i32>,

    /// Generator seed
    #[arg(short, long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    let (rows, seed) = (args.rows, args.seed);
    let cols = args.cols.unwrap_or(rows);

    let maze = generate(rows, cols, seed, &GenConfig::default())?;
    let grid = maze.grid.sealed();
    if !maze.solvable {
        println!("{grid}");
        return Err(format!("maze {rows}x{cols} (seed {seed}) is not solvable").into());
    }

    let (bfs, metrics) = solve_bfs(&grid);
    println!("BFS: {} cells, {} expanded", metrics.path_length, metrics.states_expanded);
    println!("{}", grid.render_path(&bfs));

    let plan = solve_value_iteration(&grid, &PlannerConfig::default());
    let path = plan.path(&grid);
    let metrics = plan.metrics(&path);
    println!(
        "Value Iteration: {} cells, {} sweeps",
        metrics.path_length, plan.iterations
    );
    println!("{}", grid.render_path(&path));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn named_flags() {
        let args = Args::try_parse_from(["show"]).unwrap();
        assert_eq!((args.rows, args.cols, args.seed), (21, None, 0));

        let args = Args::try_parse_from(["show", "--rows", "11", "-c", "31", "--seed", "7"]).unwrap();
        assert_eq!((args.rows, args.cols, args.seed), (11, Some(31), 7));
        assert!(Args::try_parse_from(["show", "11"]).is_err());
    }
}
