//! Typed option values

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::log_level::LogLevel;
use crate::wildcard::WildcardList;

pub const MILLISECONDS_IN_SECOND: f64 = 1000.0;
pub const MILLISECONDS_IN_MINUTE: f64 = 60.0 * MILLISECONDS_IN_SECOND;

/// Unit a duration option's bare numbers are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Milliseconds,
    Seconds,
    Minutes,
}

impl DurationUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            DurationUnit::Milliseconds => "ms",
            DurationUnit::Seconds => "s",
            DurationUnit::Minutes => "m",
        }
    }

    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix.to_ascii_lowercase().as_str() {
            "ms" => Some(DurationUnit::Milliseconds),
            "s" => Some(DurationUnit::Seconds),
            "m" => Some(DurationUnit::Minutes),
            _ => None,
        }
    }

    pub fn to_millis(self, amount: f64) -> f64 {
        match self {
            DurationUnit::Milliseconds => amount,
            DurationUnit::Seconds => amount * MILLISECONDS_IN_SECOND,
            DurationUnit::Minutes => amount * MILLISECONDS_IN_MINUTE,
        }
    }
}

/// A duration in (possibly fractional) milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct DurationMillis(pub f64);

impl DurationMillis {
    /// Time elapsed from `start` to `end` (both in milliseconds).
    ///
    /// Clock skew can make `end` precede `start`; the result is clamped to zero
    /// instead of going negative.
    pub fn between(start: f64, end: f64) -> Self {
        let elapsed = end - start;
        if elapsed < 0.0 {
            tracing::debug!(start, end, "negative duration clamped to zero");
            return DurationMillis(0.0);
        }
        DurationMillis(elapsed)
    }

    pub fn as_millis(self) -> f64 {
        self.0
    }

    pub fn as_secs_f64(self) -> f64 {
        self.0 / MILLISECONDS_IN_SECOND
    }
}

impl fmt::Display for DurationMillis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// `key=value` labels, sorted by key.
pub type Labels = BTreeMap<String, String>;

/// A parsed, validated option value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Duration(DurationMillis),
    String(String),
    WildcardList(WildcardList),
    LogLevel(LogLevel),
    Labels(Labels),
}

impl OptionValue {
    pub fn is_null(&self) -> bool {
        matches!(self, OptionValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            OptionValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            OptionValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_duration(&self) -> Option<DurationMillis> {
        match self {
            OptionValue::Duration(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_wildcard_list(&self) -> Option<&WildcardList> {
        match self {
            OptionValue::WildcardList(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_log_level(&self) -> Option<LogLevel> {
        match self {
            OptionValue::LogLevel(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_labels(&self) -> Option<&Labels> {
        match self {
            OptionValue::Labels(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Null => f.write_str("null"),
            OptionValue::Bool(value) => write!(f, "{value}"),
            OptionValue::Int(value) => write!(f, "{value}"),
            OptionValue::Float(value) => write!(f, "{value}"),
            OptionValue::Duration(value) => write!(f, "{value}"),
            OptionValue::String(value) => f.write_str(value),
            OptionValue::WildcardList(value) => write!(f, "{value}"),
            OptionValue::LogLevel(value) => write!(f, "{value}"),
            OptionValue::Labels(labels) => {
                for (index, (key, value)) in labels.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{key}={value}")?;
                }
                Ok(())
            }
        }
    }
}
