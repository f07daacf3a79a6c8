//! Error types for option parsing, raw sources and resolution

use std::path::PathBuf;
use thiserror::Error;

use crate::options::OptionName;

/// A raw value that could not be turned into its option's typed value.
///
/// Recoverable: the resolver falls back to the option's default.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("`{raw}` is not a boolean (expected true/false, yes/no, on/off or 1/0)")]
    InvalidBool { raw: String },

    #[error("`{raw}` is not an integer")]
    InvalidInt { raw: String },

    #[error("`{raw}` is not a finite number")]
    InvalidFloat { raw: String },

    #[error("`{raw}` is not a duration")]
    InvalidDuration { raw: String },

    #[error("`{raw}` uses unknown duration unit `{unit}` (expected ms, s or m)")]
    UnknownDurationUnit { raw: String, unit: String },

    #[error("`{raw}` is out of range ({bound})")]
    OutOfRange { raw: String, bound: String },

    #[error("`{raw}` is not a log level (expected off, critical, error, warning, info, debug or trace)")]
    UnknownLogLevel { raw: String },
}

/// A raw source that could not be read at all. Fatal to resolution.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: expected `key = value`, found `{text}`", .path.display())]
    Syntax { path: PathBuf, line: usize, text: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config source `{source_name}` is unreadable")]
    Source {
        source_name: String,
        #[source]
        source: SourceError,
    },

    #[error("option `{0}` has no registered metadata")]
    MissingMetadata(OptionName),

    #[error("option `{0}` is registered more than once")]
    DuplicateMetadata(OptionName),

    #[error("option `{option}` is registered as {found}, expected {expected}")]
    MetadataKindMismatch { option: OptionName, expected: &'static str, found: &'static str },
}
