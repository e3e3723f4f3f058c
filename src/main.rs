use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use waypoint::parsed_types::Cell;
use waypoint::search::{config::PlannerConfig, Maze};

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Parse a maze file and print it with its dimensions and cell counts.
struct Args {
    #[arg(value_name = "MAZE")]
    maze: PathBuf,
    #[arg(short, long, value_name = "CONFIG", help = "Config file with cell costs")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let costs = match args.config.as_deref().map(PlannerConfig::from_path) {
        None => Default::default(),
        Some(Ok(config)) => config.costs,
        Some(Err(e)) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let maze = match Maze::from_path_with_costs(&args.maze, costs) {
        Ok(maze) => maze,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    print!("{maze}");
    println!("Size: {} x {}", maze.width(), maze.height());
    for cell in [Cell::Floor, Cell::Mud, Cell::Wall] {
        match maze.costs().of(cell) {
            Some(cost) => println!("{cell:?}: {} (cost {cost})", maze.count(cell)),
            None => println!("{cell:?}: {}", maze.count(cell)),
        }
    }
    ExitCode::SUCCESS
}
