//! Command-line interface for otel-options
//!
//! Provides `show`, `options`, `match` and `check-list` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod options;
mod show;
mod utils;
mod wildcard;

/// Resolve and inspect OpenTelemetry agent configuration options
#[derive(Parser)]
#[command(name = "otel-options")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve every option from overrides, environment and ini file
    Show(show::ShowArgs),

    /// List registered options with their kinds and defaults
    Options(options::OptionsArgs),

    /// Test texts against a single wildcard pattern
    Match(wildcard::MatchArgs),

    /// Find the first pattern of a comma-separated wildcard list matching each text
    CheckList(wildcard::CheckListArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // The level added here overrides a bare level in RUST_LOG (`RUST_LOG=debug`
    // still logs at WARN without --verbose). Target directives such as
    // `RUST_LOG=otel_options::config=debug` still take effect.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Show(args) => show::run(args),
        Commands::Options(args) => options::run(args),
        Commands::Match(args) => wildcard::run_match(args),
        Commands::CheckList(args) => wildcard::run_check_list(args),
    }
}
