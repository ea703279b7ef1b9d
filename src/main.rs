//! Snake Cube Solver
//!
//! Finds every folding of a 39-run snake into a 4x4x4 cube. Each run must turn
//! relative to the one before it, stay inside the cube and land on empty cells.
//! Solutions stream to stdout as they are found, progress goes to stderr, and the
//! resulting listing can be counted, verified or viewed in 3D.

mod visualization;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::info;

use snakecube::grid::{coord_to_idx, format_path, in_bounds, Coord};
use snakecube::listing::{self, ParseError};
use snakecube::puzzle::{SNAKE_DIM, SNAKE_GRID_SIZE, SNAKE_PUZZLE};
use snakecube::report::{StreamReporter, DEFAULT_PROGRESS_INTERVAL};
use snakecube::solution::SolutionRecord;
use snakecube::solver::Solver;

/// Solves the 4x4x4 snake cube puzzle and inspects its solutions.
#[derive(Parser)]
#[command(name = "snakecube")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Search for every folding and stream solutions to stdout.
    Solve(SolveArgs),
    /// Count the solutions in a listing, per starting cell.
    Count {
        /// Listing to read; stdin when omitted.
        file: Option<PathBuf>,
    },
    /// Check every solution in a listing against the puzzle.
    Verify {
        /// Listing to read; stdin when omitted.
        file: Option<PathBuf>,
        /// Print each valid solution as z-slices labelled by run.
        #[arg(long)]
        render: bool,
    },
    /// Display the solutions in a listing in an interactive 3D viewer.
    Display {
        /// Listing to read; stdin when omitted.
        file: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
struct SolveArgs {
    /// Only search from this starting cell, given as X,Y,Z.
    #[arg(long, value_parser = parse_start)]
    start: Option<Coord>,
    /// Attempts between progress lines on stderr; 0 disables them.
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    progress_interval: u64,
    /// Suppress progress lines.
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Solve(args)) => run_solver(&args),
        None => run_solver(&SolveArgs {
            start: None,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            quiet: false,
        }),
        Some(Command::Count { file }) => run_count(file),
        Some(Command::Verify { file, render }) => run_verify(file, render),
        Some(Command::Display { file }) => run_display(file),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

/// Parses a `X,Y,Z` starting cell and checks it lies in the cube.
fn parse_start(text: &str) -> Result<Coord, String> {
    let parts: Vec<_> = text.split(',').map(|part| part.trim().parse::<i32>()).collect();
    let coord = match parts.as_slice() {
        [Ok(x), Ok(y), Ok(z)] => (*x, *y, *z),
        _ => return Err(format!("expected X,Y,Z, got {text:?}")),
    };
    if !in_bounds::<SNAKE_DIM>(coord) {
        return Err(format!(
            "{text:?} is outside the {SNAKE_DIM}x{SNAKE_DIM}x{SNAKE_DIM} cube"
        ));
    }
    Ok(coord)
}

/// Runs the search, streaming solutions to stdout.
fn run_solver(args: &SolveArgs) -> Result<(), String> {
    let reporter = StreamReporter::stdio(args.quiet);
    let mut solver =
        Solver::new(&SNAKE_PUZZLE, reporter).with_progress_interval(args.progress_interval);

    let summary = match args.start {
        Some((x, y, z)) => solver.run([coord_to_idx::<SNAKE_DIM>(x, y, z)]),
        None => solver.solve_all(),
    }
    .map_err(|e| format!("Failed to write output: {e}"))?;

    info!("{} solutions found", summary.solutions_found);
    Ok(())
}

/// Loads a listing from `file`, or from stdin.
fn load_listing(file: Option<PathBuf>) -> Result<Vec<SolutionRecord>, String> {
    let loaded = match &file {
        Some(path) => File::open(path)
            .map_err(ParseError::from)
            .and_then(|f| listing::load_all(BufReader::new(f))),
        None => listing::load_all(io::stdin().lock()),
    };
    let name = file.map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string());
    loaded.map_err(|e| format!("{name}: {e}"))
}

/// Prints the total number of solutions and the count per starting cell.
fn run_count(file: Option<PathBuf>) -> Result<(), String> {
    let solutions = load_listing(file)?;
    let counts = listing::count_by_start(&solutions);

    let mut starts: Vec<_> = counts.into_iter().collect();
    starts.sort_unstable();

    println!("{} solutions", solutions.len());
    for ((x, y, z), count) in starts {
        println!("({x},{y},{z}): {count}");
    }
    Ok(())
}

/// Replays every solution; fails if any is invalid.
fn run_verify(file: Option<PathBuf>, render: bool) -> Result<(), String> {
    let solutions = load_listing(file)?;

    let mut invalid = 0;
    for (index, solution) in solutions.iter().enumerate() {
        let solution = solution.as_solution();
        match solution.replay::<SNAKE_DIM>(&SNAKE_PUZZLE.moves) {
            Ok(_) => {
                if render {
                    println!("{solution}");
                    print!("{}", format_path::<SNAKE_DIM, SNAKE_GRID_SIZE>(&solution));
                    println!();
                }
            }
            Err(e) => {
                invalid += 1;
                println!("solution {}: {e}", index + 1);
            }
        }
    }

    println!("{} of {} solutions valid", solutions.len() - invalid, solutions.len());
    if invalid > 0 {
        return Err(format!("{invalid} invalid solutions"));
    }
    Ok(())
}

/// Verifies a listing and displays it.
fn run_display(file: Option<PathBuf>) -> Result<(), String> {
    let solutions = load_listing(file)?;
    for (index, solution) in solutions.iter().enumerate() {
        solution
            .as_solution()
            .replay::<SNAKE_DIM>(&SNAKE_PUZZLE.moves)
            .map_err(|e| format!("solution {}: {e}", index + 1))?;
    }

    println!("Loaded {} solutions", solutions.len());
    println!("Controls: Left/Right navigate, Up/Down explode, R reset");
    visualization::display::<SNAKE_DIM>(solutions);
    Ok(())
}
