//! Campus visualizer CLI.
//!
//! Provides the `campus` binary, which runs the same traced search and sort
//! engines as the HTTP server and prints the same JSON reports to stdout.
//! Useful for inspecting a dataset or a trace without starting the server.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use campus_core::{CampusDataset, CampusGraph, LocationId};
use campus_trace::{BinarySearchReport, QuickSortReport};

/// Campus navigation visualizer tools.
#[derive(Parser)]
#[command(name = "campus", about = "Campus navigation visualizer tools")]
struct Cli {
    /// Path to a JSON campus dataset (default: built-in sample campus).
    #[arg(short, long, global = true)]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List every location with its id.
    Locations,

    /// Binary-search location names and print the step trace.
    Search {
        /// Exact, case-sensitive location name.
        query: String,
    },

    /// Quicksort locations by distance and print the step trace.
    Sort {
        /// Id of the reference location.
        reference: u32,
    },
}

fn main() {
    let cli = Cli::parse();
    process::exit(run(cli));
}

/// Executes one subcommand.
///
/// Returns exit code: 0 = success, 1 = invalid reference,
/// 3 = dataset I/O or parse error.
fn run(cli: Cli) -> i32 {
    let campus = match load_campus(cli.dataset.as_deref()) {
        Ok(campus) => campus,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 3;
        }
    };

    match cli.command {
        Commands::Locations => print_json(&campus.locations()),
        Commands::Search { query } => {
            let report = BinarySearchReport::from(campus_trace::search_campus(&campus, &query));
            print_json(&report)
        }
        Commands::Sort { reference } => {
            match campus_trace::sort_campus(&campus, LocationId(reference)) {
                Ok(outcome) => print_json(&QuickSortReport::from(outcome)),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    1
                }
            }
        }
    }
}

fn load_campus(path: Option<&std::path::Path>) -> Result<CampusGraph, campus_core::CoreError> {
    let dataset = match path {
        Some(path) => CampusDataset::from_path(path)?,
        None => CampusDataset::sample(),
    };
    CampusGraph::from_dataset(&dataset)
}

/// Prints a value as pretty JSON to stdout.
fn print_json<T: Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: failed to serialize result: {}", e);
            3
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("campus").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn parses_search_with_dataset() {
        let cli = parse(&["search", "Library", "--dataset", "campus.json"]);
        assert_eq!(cli.dataset, Some(PathBuf::from("campus.json")));
        assert!(matches!(cli.command, Commands::Search { ref query } if query == "Library"));
    }

    #[test]
    fn sort_requires_numeric_reference() {
        let args = ["campus", "sort", "gym"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn exit_codes() {
        assert_eq!(run(parse(&["search", "Library"])), 0);
        assert_eq!(run(parse(&["sort", "0"])), 0);
        assert_eq!(run(parse(&["sort", "999"])), 1);
        assert_eq!(run(parse(&["-d", "/nonexistent/campus.json", "locations"])), 3);
    }
}
