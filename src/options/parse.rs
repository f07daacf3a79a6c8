//! Raw-string parsers for each option kind

use once_cell::sync::Lazy;
use regex::Regex;

use super::value::{DurationUnit, Labels};
use crate::error::ParseError;

const TRUE_TOKENS: &[&str] = &["true", "yes", "on", "1"];
const FALSE_TOKENS: &[&str] = &["false", "no", "off", "0"];

/// Number followed by an optional unit suffix, e.g. `30`, `1.5s`, `250 ms`.
static DURATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)\s*([A-Za-z]*)$")
        .expect("valid duration regex")
});

pub fn parse_bool(raw: &str) -> Result<bool, ParseError> {
    if TRUE_TOKENS.iter().any(|token| token.eq_ignore_ascii_case(raw)) {
        return Ok(true);
    }
    if FALSE_TOKENS.iter().any(|token| token.eq_ignore_ascii_case(raw)) {
        return Ok(false);
    }
    Err(ParseError::InvalidBool { raw: raw.to_string() })
}

pub fn parse_int(raw: &str) -> Result<i64, ParseError> {
    raw.parse::<i64>().map_err(|_| ParseError::InvalidInt { raw: raw.to_string() })
}

pub fn parse_float(raw: &str) -> Result<f64, ParseError> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::InvalidFloat { raw: raw.to_string() }),
    }
}

/// Parse a duration into milliseconds. Bare numbers are in `default_unit`.
pub fn parse_duration(raw: &str, default_unit: DurationUnit) -> Result<f64, ParseError> {
    let caps = DURATION_PATTERN
        .captures(raw)
        .ok_or_else(|| ParseError::InvalidDuration { raw: raw.to_string() })?;
    let amount = parse_float(&caps[1])
        .map_err(|_| ParseError::InvalidDuration { raw: raw.to_string() })?;
    let unit = match &caps[2] {
        "" => default_unit,
        suffix => DurationUnit::from_suffix(suffix).ok_or_else(|| {
            ParseError::UnknownDurationUnit { raw: raw.to_string(), unit: suffix.to_string() }
        })?,
    };
    let millis = unit.to_millis(amount);
    if !millis.is_finite() {
        return Err(ParseError::InvalidDuration { raw: raw.to_string() });
    }
    Ok(millis)
}

/// Parse comma-separated `key=value` pairs.
///
/// Malformed entries are dropped with a warning; the rest still parse. The
/// last occurrence of a duplicate key wins.
pub fn parse_labels(raw: &str) -> Labels {
    let mut labels = Labels::new();
    for entry in raw.split(',').map(str::trim) {
        if entry.is_empty() {
            continue;
        }
        match entry.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                labels.insert(key.trim().to_string(), value.trim().to_string());
            }
            _ => tracing::warn!(entry, "dropping malformed label (expected `key=value`)"),
        }
    }
    labels
}

/// Format a float so that parsing it back yields the same value.
pub fn format_float(value: f64) -> String {
    value.to_string()
}
