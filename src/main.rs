//! Binary entry point for axiomhive.
//!
//! Reads a query from standard input and prints its Tree-of-Thoughts
//! synthesis to standard output.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

use axiomhive::cli::SearchCommand;
use axiomhive::config::{AxiomConfig, ColorChoice, MatchMode};
use axiomhive::observability::{self, InitOptions};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Axiom Hive - Tree-of-Thoughts deep search over a local knowledge graph.
///
/// The query is read from standard input.
#[derive(Parser)]
#[command(name = "axiomhive")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging on stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the knowledge graph database.
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Maximum number of records gathered per branch.
    #[arg(long)]
    limit: Option<usize>,

    /// Match each branch's own sub-question instead of the original query.
    #[arg(long)]
    per_branch: bool,

    /// When to style branch labels.
    #[arg(long, value_enum)]
    color: Option<ColorChoice>,
}

/// Main entry point.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        },
    };

    if let Err(e) = observability::init_from_settings(
        &config.logging,
        InitOptions {
            verbose: cli.verbose,
        },
    ) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    config.color.apply();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match SearchCommand::new(&config).run(stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "search failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Loads configuration and applies command-line overrides.
fn load_config(cli: &Cli) -> axiomhive::Result<AxiomConfig> {
    let mut config = match &cli.config {
        Some(path) => AxiomConfig::load_from_file(path)?,
        None => AxiomConfig::load_default().unwrap_or_else(|e| {
            eprintln!("Warning: ignoring config file: {e}");
            AxiomConfig::default()
        }),
    };

    if let Some(db_path) = &cli.db_path {
        config = config.with_db_path(db_path);
    }
    if let Some(limit) = cli.limit {
        config = config.with_evidence_limit(limit);
    }
    if cli.per_branch {
        config = config.with_match_mode(MatchMode::PerBranch);
    }
    if let Some(color) = cli.color {
        config = config.with_color(color);
    }

    Ok(config)
}
