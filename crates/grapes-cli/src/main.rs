//! Grapes CLI - run graph algorithms on JSON graph files.
//!
//! Each command loads one graph file (see [`loader::GraphFile`]), runs a
//! single algorithm and prints the result as a table or as JSON.

mod commands;
mod loader;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Grapes graph algorithm runner.
///
/// Loads a graph from a JSON file and reports its structure, connectivity
/// and shortest paths.
#[derive(Parser)]
#[command(name = "grapes")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    /// Suppress all output except errors
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

/// Output format options.
#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// Machine-readable JSON format
    Json,
}

/// Algorithms usable for a single source-target path.
#[derive(Clone, Copy, ValueEnum, Default)]
enum PathAlgorithm {
    /// Bellman-Ford if any weight is negative, Dijkstra otherwise
    #[default]
    Auto,
    /// Dijkstra (non-negative weights only)
    Dijkstra,
    /// Bellman-Ford (SPFA)
    BellmanFord,
    /// Floyd-Warshall
    FloydWarshall,
}

/// Algorithms usable for single- or multi-source distances.
#[derive(Clone, Copy, ValueEnum, Default)]
enum SourceAlgorithm {
    /// Dijkstra (non-negative weights only)
    #[default]
    Dijkstra,
    /// Bellman-Ford (SPFA)
    BellmanFord,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Display graph information (kind, counts, storage)
    Info {
        /// Path to the graph file
        path: PathBuf,
    },

    /// List connected component sizes
    Components {
        /// Path to the graph file
        path: PathBuf,
    },

    /// Check whether the graph is bipartite
    Bipartite {
        /// Path to the graph file
        path: PathBuf,
    },

    /// Find a shortest path between two nodes
    Path {
        /// Path to the graph file
        path: PathBuf,

        /// Source node label
        #[arg(long)]
        from: String,

        /// Target node label
        #[arg(long)]
        to: String,

        /// Algorithm to use
        #[arg(long, value_enum, default_value_t)]
        algorithm: PathAlgorithm,
    },

    /// Compute shortest distances from one or more sources
    Distances {
        /// Path to the graph file
        path: PathBuf,

        /// Source node label (repeatable)
        #[arg(long = "source", required = true)]
        sources: Vec<String>,

        /// Algorithm to use
        #[arg(long, value_enum, default_value_t)]
        algorithm: SourceAlgorithm,
    },

    /// Compute the all-pairs distance matrix (Floyd-Warshall)
    AllPairs {
        /// Path to the graph file
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    } else if !cli.quiet {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .init();
    }

    let result = match cli.command {
        Commands::Info { path } => commands::info::run(&path, cli.format, cli.quiet),
        Commands::Components { path } => commands::components::run(&path, cli.format, cli.quiet),
        Commands::Bipartite { path } => commands::bipartite::run(&path, cli.format, cli.quiet),
        Commands::Path {
            path,
            from,
            to,
            algorithm,
        } => commands::path::run(&path, &from, &to, algorithm, cli.format, cli.quiet),
        Commands::Distances {
            path,
            sources,
            algorithm,
        } => commands::distances::run(&path, &sources, algorithm, cli.format, cli.quiet),
        Commands::AllPairs { path } => commands::all_pairs::run(&path, cli.format, cli.quiet),
    };

    if let Err(e) = result {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
