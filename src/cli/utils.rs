//! Shared CLI utilities.

use anyhow::Result;
use serde::Serialize;

use crate::options::OptionValue;

/// Placeholder printed for options with no value.
pub const UNSET: &str = "-";

/// Render a resolved value for the text table.
pub fn display_value(value: &OptionValue) -> String {
    if value.is_null() {
        return UNSET.to_string();
    }
    value.to_string()
}

/// Pretty-print `value` as JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Width of the widest item, for left-aligned columns.
pub fn column_width<'a, I>(items: I) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    items.into_iter().map(str::len).max().unwrap_or(0)
}
