//! Match and check-list command implementations

use anyhow::Result;
use clap::Args;

use super::utils::UNSET;
use crate::wildcard::{WildcardList, WildcardMatcher};

#[derive(Args)]
pub struct MatchArgs {
    /// Wildcard pattern; `*` matches any run of characters, a leading `(?-i)`
    /// makes matching case-sensitive
    #[arg(value_name = "PATTERN", allow_hyphen_values = true)]
    pub pattern: String,

    /// Texts to test against the pattern
    #[arg(value_name = "TEXT", required = true, allow_hyphen_values = true)]
    pub texts: Vec<String>,
}

#[derive(Args)]
pub struct CheckListArgs {
    /// Comma-separated wildcard patterns, e.g. `password, *token*`
    #[arg(value_name = "LIST", allow_hyphen_values = true)]
    pub list: String,

    /// Texts to look up in the list
    #[arg(value_name = "TEXT", required = true, allow_hyphen_values = true)]
    pub texts: Vec<String>,
}

pub fn run_match(args: MatchArgs) -> Result<()> {
    let matcher = WildcardMatcher::new(&args.pattern);
    println!("{matcher}");
    for text in &args.texts {
        println!("{}\t{text}", matcher.matches(text));
    }
    Ok(())
}

pub fn run_check_list(args: CheckListArgs) -> Result<()> {
    let list = WildcardList::parse(&args.list);
    tracing::debug!(patterns = list.len(), list = %list, "compiled wildcard list");
    for text in &args.texts {
        match list.first_match(text) {
            Some(matcher) => println!("{matcher}\t{text}"),
            None => println!("{UNSET}\t{text}"),
        }
    }
    Ok(())
}
