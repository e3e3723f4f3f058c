use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use waypoint::search::{
    config::PlannerConfig, validate, GoalSet, Maze, Plan, Position, Verbosity, VisitOrder,
};

#[derive(Parser)]
#[command(version)]
/// Check that a plan is a legal route through a maze visiting every goal,
/// and report its cost.
struct Cli {
    #[arg(help = "The maze file")]
    maze: PathBuf,
    #[arg(help = "The plan file to validate")]
    plan: PathBuf,
    #[arg(
        help = "The start cell, as x,y",
        short = 's',
        long = "start",
        id = "START"
    )]
    start: Position,
    #[arg(
        help = "A goal cell, as x,y; repeat for more goals",
        short = 'g',
        long = "goal",
        id = "GOAL",
        required = true
    )]
    goals: Vec<Position>,
    #[arg(
        value_enum,
        help = "How the goals must be visited",
        long = "order",
        id = "ORDER",
        default_value_t = VisitOrder::Any
    )]
    visit_order: VisitOrder,
    #[arg(help = "A TOML config file with cell costs", long = "config", id = "CONFIG")]
    config: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Silent
    )]
    verbosity: Verbosity,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.verbosity.init_tracing(false);

    match check(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Plan is invalid: {e}");
            ExitCode::FAILURE
        }
    }
}

fn check(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let costs = match &cli.config {
        Some(path) => PlannerConfig::from_path(path)?.costs,
        None => Default::default(),
    };
    let maze = Maze::from_path_with_costs(&cli.maze, costs)?;
    let plan = Plan::from_path(&cli.plan)?;
    let goals = GoalSet::with_order(cli.goals.iter().copied(), cli.visit_order);

    let cost = validate(&plan, &maze, cli.start, &goals)?;
    println!("Plan is valid");
    println!("Plan length: {}", plan.len());
    println!("Plan cost: {cost}");
    Ok(())
}
