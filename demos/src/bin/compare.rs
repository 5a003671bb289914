//! Run every solver on freshly generated mazes and report one record per
//! solver and maze. Set `RUST_LOG` for solver diagnostics on stderr.

use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use maze_demos::{DEFAULT_SIZES, RUNS, Record, records, seed_for, solve_all, write_csv};
use maze_gen::{GenConfig, generate};
use maze_mdp::PlannerConfig;

#[derive(Parser, Debug)]
#[command(name = "compare")]
#[command(about = "Compare DFS, BFS, A*, value iteration and policy iteration on random mazes")]
struct Args {
    /// Side lengths of the square mazes, comma separated
    #[arg(short, long, value_delimiter = ',', default_values_t = DEFAULT_SIZES)]
    sizes: Vec<i32>,

    /// Mazes generated per size
    #[arg(short, long, default_value_t = RUNS)]
    runs: u32,

    /// Write all records to this CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print each record as a JSON line instead of a summary line
    #[arg(short, long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let gen_config = GenConfig::default();
    gen_config.validate()?;
    let planner_config = PlannerConfig::default();
    planner_config.validate()?;

    let mut all: Vec<Record> = Vec::new();
    for &size in &args.sizes {
        for run in 1..=args.runs {
            let maze = generate(size, size, seed_for(size, run), &gen_config)?;
            if !maze.solvable {
                log::warn!("maze {size}x{size} run {run} is not solvable, skipping");
                continue;
            }
            let outcomes = solve_all(&maze.grid, &planner_config);
            for rec in records(&maze.grid, run, &outcomes) {
                if args.json {
                    println!("{}", serde_json::to_string(&rec)?);
                } else {
                    println!(
                        "{:<16} {:>7} run {}: {:.4}s expanded={} peak={} length={}",
                        rec.algorithm,
                        rec.maze_size,
                        rec.run,
                        rec.runtime,
                        rec.states_expanded,
                        rec.peak_memory_proxy,
                        rec.path_length
                    );
                }
                all.push(rec);
            }
            log::info!("finished run {run} for maze size {size}x{size}");
        }
    }

    if let Some(path) = &args.output {
        write_csv(File::create(path)?, &all)?;
        log::info!("wrote {} records to {}", all.len(), path.display());
    }
    Ok(())
}
