//! # dvn CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dvn_cli::assess::{run_assess, AssessArgs};
use dvn_cli::checklist::{run_checklist, ChecklistArgs};
use dvn_cli::deadlines::{run_deadlines, DeadlinesArgs};
use dvn_cli::directory::{run_citations, run_resources, CitationsArgs, ResourcesArgs};
use dvn_cli::factors::{run_factors, FactorsArgs};

/// Divorce Navigator
///
/// Informational tools for people separating in Ohio: complexity scoring,
/// a recommended legal path, projected deadlines, a document checklist and
/// a directory of support organizations. Not legal advice.
#[derive(Parser, Debug)]
#[command(name = "dvn", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the complexity factors and their weights.
    Factors(FactorsArgs),

    /// Score answers and recommend dissolution, divorce or an attorney.
    Assess(AssessArgs),

    /// Project procedural deadlines from a start date.
    Deadlines(DeadlinesArgs),

    /// Show document checklist progress.
    Checklist(ChecklistArgs),

    /// Browse support organizations.
    Resources(ResourcesArgs),

    /// List or look up the statutes and rules the tools cite.
    Citations(CitationsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Commands::Factors(args) => run_factors(args),
        Commands::Assess(args) => run_assess(args),
        Commands::Deadlines(args) => run_deadlines(args),
        Commands::Checklist(args) => run_checklist(args),
        Commands::Resources(args) => run_resources(args),
        Commands::Citations(args) => run_citations(args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}
