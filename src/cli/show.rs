//! Show command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::utils::{column_width, display_value, print_json};
use crate::config::{ConfigResolver, ConfigSnapshot};
use crate::sources::{EnvVarsSource, IniFileSource, MapSource, RawSource};

#[derive(Args)]
pub struct ShowArgs {
    /// Read options from this ini file (lowest precedence)
    #[arg(long, value_name = "PATH", env = "ELASTIC_OTEL_INI_FILE")]
    pub ini: Option<PathBuf>,

    /// Override an option, e.g. `--set transaction_sample_rate=0.5` (repeatable)
    #[arg(short = 's', long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,

    /// Ignore environment variables
    #[arg(long)]
    pub no_env: bool,

    /// Print resolved values as a JSON object keyed by option name
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let mut overrides = MapSource::new("cli");
    for assignment in &args.set {
        overrides
            .set_assignment(assignment)
            .with_context(|| format!("Invalid --set value: {assignment}"))?;
    }
    let env = EnvVarsSource::new();
    let ini = args.ini.as_ref().map(IniFileSource::new);

    let mut sources: Vec<&dyn RawSource> = Vec::with_capacity(3);
    sources.push(&overrides);
    if !args.no_env {
        sources.push(&env);
    }
    if let Some(ini) = &ini {
        sources.push(ini);
    }

    let snapshot = ConfigResolver::global().resolve(&sources)?;

    if args.json {
        return print_json(&snapshot);
    }
    print_table(&snapshot);
    Ok(())
}

fn print_table(snapshot: &ConfigSnapshot) {
    let width = column_width(snapshot.iter().map(|(name, _)| name.as_str()));
    for (name, value) in snapshot.iter() {
        let origin = snapshot.origin(name).unwrap_or("default");
        println!("{:<width$}  {}  ({origin})", name.as_str(), display_value(value));
    }

    if !snapshot.rejected().is_empty() {
        println!();
        println!("Rejected values:");
        for rejected in snapshot.rejected() {
            println!("  {} from {}: {}", rejected.option, rejected.source, rejected.error);
        }
    }
}
