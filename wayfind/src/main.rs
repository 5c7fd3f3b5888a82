//! wayfind — search a terrain map and show the route.
//!
//! Reads a text map with `A`/`B` endpoint markers, runs the chosen search
//! strategy (or all of them with `--compare`), and prints the board with
//! open, closed, and route cells marked.

mod render;

use std::fs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use wayfarer_core::{CostModel, Grid};
use wayfarer_search::{CancelToken, PathReport, SearchEngine, SearchStatus, Strategy};

/// Find a route between the `A` and `B` markers of a terrain map.
#[derive(Parser, Debug)]
#[command(name = "wayfind", version, about)]
struct Cli {
    /// Map file: one row of terrain symbols per line.
    map: PathBuf,

    /// Search strategy: astar, dijkstra, or bfs.
    #[arg(short, long, default_value = "astar")]
    strategy: Strategy,

    /// Print the board after every engine iteration.
    #[arg(long, conflicts_with = "json")]
    trace: bool,

    /// Run all three strategies and print a summary line for each.
    #[arg(long, conflicts_with_all = ["strategy", "trace", "json"])]
    compare: bool,

    /// Print the final report as JSON instead of the board.
    #[arg(long)]
    json: bool,

    /// Give up after this many expansions.
    #[arg(long, value_name = "N")]
    max_expansions: Option<usize>,

    /// Cancel the search after this many milliseconds.
    #[arg(long, value_name = "MS", conflicts_with = "trace")]
    timeout_ms: Option<u64>,

    /// Plain output without colors.
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("wayfind: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let text =
        fs::read_to_string(&cli.map).map_err(|err| format!("{}: {err}", cli.map.display()))?;
    let grid = Grid::parse(&text)?;
    let costs = CostModel::default();
    log::debug!(
        "parsed {}: {} rows, {} cells",
        cli.map.display(),
        grid.height(),
        grid.cell_count()
    );

    let color = !cli.no_color && io::stdout().is_terminal();

    if cli.compare {
        for strategy in Strategy::ALL {
            let mut engine = build_engine(&grid, &costs, strategy, cli);
            let report = timed_run(&mut engine, cli.timeout_ms);
            println!("{}", summary_line(&report));
        }
        return Ok(());
    }

    if cli.trace {
        let report = trace_run(&grid, &costs, cli, color)?;
        print_summary(&report);
        return Ok(());
    }

    let mut engine = build_engine(&grid, &costs, cli.strategy, cli);
    let report = timed_run(&mut engine, cli.timeout_ms);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    render::print_board(&grid, &engine, color)?;
    print_summary(&report);
    Ok(())
}

fn build_engine<'a>(
    grid: &'a Grid,
    costs: &'a CostModel,
    strategy: Strategy,
    cli: &Cli,
) -> SearchEngine<'a> {
    let mut engine = SearchEngine::new(grid, costs, strategy);
    if let Some(limit) = cli.max_expansions {
        engine = engine.with_expansion_limit(limit);
    }
    engine
}

fn timed_run(engine: &mut SearchEngine<'_>, timeout_ms: Option<u64>) -> PathReport {
    let Some(ms) = timeout_ms else {
        return engine.run();
    };
    let token = CancelToken::new();
    let deadline = token.clone();
    std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(ms));
        deadline.cancel();
    });
    engine.run_with_cancel(&token)
}

/// Step the engine one iteration at a time, printing the board after each.
fn trace_run(
    grid: &Grid,
    costs: &CostModel,
    cli: &Cli,
    color: bool,
) -> Result<PathReport, Box<dyn std::error::Error>> {
    let width = grid.rows().map(|row| row.len()).max().unwrap_or(0);
    let mut engine = build_engine(grid, costs, cli.strategy, cli);
    loop {
        let status = engine.step();
        render::print_board(grid, &engine, color)?;
        println!("{}", "-".repeat(width));
        if status.is_terminal() {
            return Ok(engine.report());
        }
    }
}

fn summary_line(report: &PathReport) -> String {
    format!(
        "{:<9} {:<10} steps={:<5} cost={:<7} expanded={:<6} open={}",
        report.strategy.to_string(),
        status_word(report.status),
        report.steps(),
        report.cost,
        report.expanded,
        report.frontier,
    )
}

fn status_word(status: SearchStatus) -> &'static str {
    match status {
        SearchStatus::Running => "running",
        SearchStatus::Found => "found",
        SearchStatus::Exhausted => "no route",
        SearchStatus::Cancelled => "cancelled",
    }
}

fn print_summary(report: &PathReport) {
    match report.status {
        SearchStatus::Found => {
            println!("route found: {} steps, cost {}", report.steps(), report.cost);
        }
        SearchStatus::Exhausted => println!("no route from start to goal"),
        SearchStatus::Cancelled => println!("search cancelled before finishing"),
        SearchStatus::Running => println!("search still running"),
    }
    println!(
        "expanded {} cells, {} still open, {} iterations",
        report.expanded, report.frontier, report.iterations
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_parses_strategy_names() {
        let cli = Cli::try_parse_from(["wayfind", "map.txt", "--strategy", "bfs"]).unwrap();
        assert_eq!(cli.strategy, Strategy::Bfs);
        assert_eq!(cli.map, PathBuf::from("map.txt"));
    }

    #[test]
    fn cli_defaults_to_astar() {
        let cli = Cli::try_parse_from(["wayfind", "map.txt"]).unwrap();
        assert_eq!(cli.strategy, Strategy::AStar);
        assert!(!cli.trace && !cli.json && !cli.compare);
    }

    #[test]
    fn cli_rejects_unknown_strategy() {
        assert!(Cli::try_parse_from(["wayfind", "map.txt", "--strategy", "dfs"]).is_err());
    }

    #[test]
    fn cli_rejects_conflicting_modes() {
        assert!(Cli::try_parse_from(["wayfind", "map.txt", "--compare", "--trace"]).is_err());
        assert!(Cli::try_parse_from(["wayfind", "map.txt", "--trace", "--json"]).is_err());
    }

    #[test]
    fn bundled_maps_are_solvable() {
        for map in [
            include_str!("../maps/meadow.txt"),
            include_str!("../maps/gap.txt"),
            include_str!("../maps/lakeland.txt"),
        ] {
            let grid = Grid::parse(map).unwrap();
            let costs = CostModel::default();
            let report = SearchEngine::new(&grid, &costs, Strategy::AStar).run();
            assert!(report.is_found());
        }
    }

    #[test]
    fn summary_line_reports_outcome() {
        let report = PathReport {
            strategy: Strategy::Dijkstra,
            status: SearchStatus::Found,
            path: vec![wayfarer_core::Point::new(0, 0), wayfarer_core::Point::new(1, 0)],
            cost: 5.5,
            expanded: 7,
            frontier: 2,
            iterations: 8,
        };
        let line = summary_line(&report);
        assert!(line.starts_with("dijkstra"));
        assert!(line.contains("found"));
        assert!(line.contains("steps=1"));
        assert!(line.contains("cost=5.5"));
        assert!(line.contains("open=2"));
    }
}
