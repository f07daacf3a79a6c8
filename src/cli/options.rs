//! Options command implementation

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use super::utils::{column_width, print_json, UNSET};
use crate::options::OptionRegistry;

#[derive(Args)]
pub struct OptionsArgs {
    /// Only list the log-level options
    #[arg(long)]
    pub log_levels: bool,

    /// Print as a JSON array
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct OptionRow {
    name: &'static str,
    kind: &'static str,
    env_var: String,
    ini_key: String,
    default: Option<String>,
}

pub fn run(args: OptionsArgs) -> Result<()> {
    let rows: Vec<OptionRow> = OptionRegistry::global()
        .iter()
        .filter(|(name, _)| !args.log_levels || name.is_log_level_related())
        .map(|(name, meta)| OptionRow {
            name: name.as_str(),
            kind: meta.kind(),
            env_var: name.env_var_name(),
            ini_key: name.ini_key(),
            default: meta.format(&meta.default_value()),
        })
        .collect();

    if args.json {
        return print_json(&rows);
    }

    let name_width = column_width(rows.iter().map(|row| row.name));
    let kind_width = column_width(rows.iter().map(|row| row.kind));
    let env_width = column_width(rows.iter().map(|row| row.env_var.as_str()));
    let ini_width = column_width(rows.iter().map(|row| row.ini_key.as_str()));
    for row in &rows {
        println!(
            "{:<name_width$}  {:<kind_width$}  {:<env_width$}  {:<ini_width$}  {}",
            row.name,
            row.kind,
            row.env_var,
            row.ini_key,
            row.default.as_deref().unwrap_or(UNSET),
        );
    }
    Ok(())
}
