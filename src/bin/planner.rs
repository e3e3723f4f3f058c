use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info};
use waypoint::search::{
    config::PlannerConfig,
    search_engines::{AStar, SearchResult},
    validate, GoalSet, HeuristicName, Maze, Position, Verbosity, VisitOrder,
};

#[derive(Parser)]
#[command(version)]
/// Find a cheapest route through a maze that visits every goal.
///
/// Exits with status 0 when a plan is found, 2 when there is none or the
/// search hit a limit, and 1 on any error.
struct Cli {
    #[arg(help = "The maze file")]
    maze: PathBuf,
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
        help = "The heuristic to use [default: from config, else nearest-goal]",
        long = "heuristic",
        id = "HEURISTIC"
    )]
    heuristic_name: Option<HeuristicName>,
    #[arg(
        value_enum,
        help = "How the goals must be visited [default: from config, else any]",
        long = "order",
        id = "ORDER"
    )]
    visit_order: Option<VisitOrder>,
    #[arg(help = "A TOML config file", long = "config", id = "CONFIG")]
    config: Option<PathBuf>,
    #[arg(
        help = "Give up after this long, e.g. 30s or 5m",
        long = "time-limit",
        id = "TIME_LIMIT",
        value_parser = humantime::parse_duration
    )]
    time_limit: Option<Duration>,
    #[arg(
        help = "Give up after this many expansions",
        long = "expansion-limit",
        id = "EXPANSION_LIMIT"
    )]
    expansion_limit: Option<usize>,
    #[arg(
        help = "Also write the plan to this file",
        short = 'o',
        long = "output",
        id = "OUTPUT"
    )]
    plan: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.verbosity.init_tracing(cli.colour);

    match plan(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether a plan was found.
fn plan(cli: Cli) -> Result<bool, Box<dyn Error>> {
    let config = match &cli.config {
        Some(path) => PlannerConfig::from_path(path)?,
        None => PlannerConfig::default(),
    };
    let mut limits = config.limits();
    if let Some(time_limit) = cli.time_limit {
        limits.time_limit = Some(time_limit);
    }
    if let Some(expansion_limit) = cli.expansion_limit {
        limits.expansion_limit = Some(expansion_limit);
    }
    let heuristic_name = cli.heuristic_name.unwrap_or(config.search.heuristic);
    let visit_order = cli.visit_order.unwrap_or(config.search.visit_order);

    let maze = Maze::from_path_with_costs(&cli.maze, config.costs)?;
    let goals = GoalSet::with_order(cli.goals, visit_order);

    let mut engine = AStar::new(heuristic_name).with_limits(limits);
    let (result, statistics) = engine.search(&maze, cli.start, &goals)?;

    match result {
        SearchResult::Success(plan) => {
            info!("validating plan");
            let cost = validate(&plan, &maze, cli.start, &goals)?;
            info!("plan is valid");
            info!(plan_length = plan.len(), plan_cost = cost.into_inner());

            println!("Plan found:");
            println!("{plan}");
            println!("Plan length: {}", plan.len());
            println!("Plan cost: {cost}");
            println!("Expanded nodes: {}", statistics.get_expanded_nodes());
            if let Some(peak_memory_usage_mb) = statistics.get_peak_memory_usage_mb() {
                println!("Peak memory: {peak_memory_usage_mb} MB");
            }

            if let Some(path) = &cli.plan {
                std::fs::write(path, format!("{plan}\n; cost = {cost}\n"))?;
                info!(plan_file = %path.display(), "plan written");
            }
            Ok(true)
        }
        result if result.is_aborted() => {
            info!("search aborted");
            println!("Search aborted: {result:?}");
            Ok(false)
        }
        result => {
            info!("no plan found");
            println!("No plan found: {result:?}");
            Ok(false)
        }
    }
}
