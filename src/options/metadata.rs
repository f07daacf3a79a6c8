//! Per-option type descriptors

use super::parse::{format_float, parse_bool, parse_duration, parse_float, parse_int, parse_labels};
use super::value::{DurationMillis, DurationUnit, OptionValue};
use crate::error::ParseError;
use crate::log_level::LogLevel;
use crate::wildcard::WildcardList;

/// How an option's raw string is parsed, bounded and defaulted.
///
/// Numeric bounds are inclusive. Values outside them are rejected, never
/// clamped. Duration bounds and defaults are in milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionMetadata {
    Bool {
        default: bool,
    },
    Int {
        min: Option<i64>,
        max: Option<i64>,
        default: i64,
    },
    Float {
        min: Option<f64>,
        max: Option<f64>,
        default: f64,
    },
    Duration {
        min: Option<f64>,
        max: Option<f64>,
        unit: DurationUnit,
        default: f64,
    },
    NullableString,
    WildcardList {
        default: WildcardList,
    },
    NullableWildcardList,
    LogLevel {
        default: Option<LogLevel>,
    },
    Labels,
}

impl OptionMetadata {
    pub fn positive_or_zero_int(default: i64) -> Self {
        OptionMetadata::Int { min: Some(0), max: None, default }
    }

    pub fn duration_in_millis(default_ms: f64) -> Self {
        OptionMetadata::Duration {
            min: Some(0.0),
            max: None,
            unit: DurationUnit::Milliseconds,
            default: default_ms,
        }
    }

    /// Like [`OptionMetadata::duration_in_millis`] but negative values are allowed.
    pub fn duration_in_millis_no_min(default_ms: f64) -> Self {
        OptionMetadata::Duration {
            min: None,
            max: None,
            unit: DurationUnit::Milliseconds,
            default: default_ms,
        }
    }

    pub fn duration_in_seconds(default_secs: f64) -> Self {
        OptionMetadata::Duration {
            min: Some(0.0),
            max: None,
            unit: DurationUnit::Seconds,
            default: DurationUnit::Seconds.to_millis(default_secs),
        }
    }

    /// Short human-readable kind, used in listings.
    pub fn kind(&self) -> &'static str {
        match self {
            OptionMetadata::Bool { .. } => "bool",
            OptionMetadata::Int { .. } => "int",
            OptionMetadata::Float { .. } => "float",
            OptionMetadata::Duration { .. } => "duration",
            OptionMetadata::NullableString => "string",
            OptionMetadata::WildcardList { .. } => "wildcard-list",
            OptionMetadata::NullableWildcardList => "wildcard-list",
            OptionMetadata::LogLevel { .. } => "log-level",
            OptionMetadata::Labels => "labels",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            OptionMetadata::Int { .. } | OptionMetadata::Float { .. } | OptionMetadata::Duration { .. }
        )
    }

    pub fn default_value(&self) -> OptionValue {
        match self {
            OptionMetadata::Bool { default } => OptionValue::Bool(*default),
            OptionMetadata::Int { default, .. } => OptionValue::Int(*default),
            OptionMetadata::Float { default, .. } => OptionValue::Float(*default),
            OptionMetadata::Duration { default, .. } => {
                OptionValue::Duration(DurationMillis(*default))
            }
            OptionMetadata::WildcardList { default } => OptionValue::WildcardList(default.clone()),
            OptionMetadata::LogLevel { default: Some(level) } => OptionValue::LogLevel(*level),
            OptionMetadata::NullableString
            | OptionMetadata::NullableWildcardList
            | OptionMetadata::LogLevel { default: None }
            | OptionMetadata::Labels => OptionValue::Null,
        }
    }

    /// Parse an already-trimmed, non-empty raw value.
    pub fn parse(&self, raw: &str) -> Result<OptionValue, ParseError> {
        match self {
            OptionMetadata::Bool { .. } => parse_bool(raw).map(OptionValue::Bool),
            OptionMetadata::Int { min, max, .. } => {
                let value = parse_int(raw)?;
                check_bounds(raw, value, *min, *max)?;
                Ok(OptionValue::Int(value))
            }
            OptionMetadata::Float { min, max, .. } => {
                let value = parse_float(raw)?;
                check_bounds(raw, value, *min, *max)?;
                Ok(OptionValue::Float(value))
            }
            OptionMetadata::Duration { min, max, unit, .. } => {
                let millis = parse_duration(raw, *unit)?;
                check_bounds(raw, millis, *min, *max)?;
                Ok(OptionValue::Duration(DurationMillis(millis)))
            }
            OptionMetadata::NullableString => Ok(OptionValue::String(raw.to_string())),
            OptionMetadata::WildcardList { .. } | OptionMetadata::NullableWildcardList => {
                Ok(OptionValue::WildcardList(WildcardList::parse(raw)))
            }
            OptionMetadata::LogLevel { .. } => raw.parse::<LogLevel>().map(OptionValue::LogLevel),
            OptionMetadata::Labels => Ok(OptionValue::Labels(parse_labels(raw))),
        }
    }

    /// Render `value` as a raw string that [`OptionMetadata::parse`] accepts.
    ///
    /// Returns `None` for null values, which have no raw form.
    pub fn format(&self, value: &OptionValue) -> Option<String> {
        match value {
            OptionValue::Null => None,
            OptionValue::Float(value) => Some(format_float(*value)),
            OptionValue::Duration(millis) => Some(format!(
                "{}{}",
                format_float(millis.as_millis()),
                DurationUnit::Milliseconds.suffix()
            )),
            other => Some(other.to_string()),
        }
    }
}

fn check_bounds<T>(raw: &str, value: T, min: Option<T>, max: Option<T>) -> Result<(), ParseError>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if let Some(min) = min {
        if value < min {
            return Err(ParseError::OutOfRange { raw: raw.to_string(), bound: format!("min {min}") });
        }
    }
    if let Some(max) = max {
        if value > max {
            return Err(ParseError::OutOfRange { raw: raw.to_string(), bound: format!("max {max}") });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::OptionMetadata;
    use crate::error::ParseError;
    use crate::log_level::LogLevel;
    use crate::options::value::{DurationMillis, OptionValue};

    #[test]
    fn seconds_duration_is_stored_in_millis() {
        let meta = OptionMetadata::duration_in_seconds(30.0);
        assert_eq!(meta.parse("30"), Ok(OptionValue::Duration(DurationMillis(30_000.0))));
        assert_eq!(meta.default_value(), OptionValue::Duration(DurationMillis(30_000.0)));
    }

    #[test]
    fn negative_duration_is_rejected_when_min_is_zero() {
        let meta = OptionMetadata::duration_in_millis(50.0);
        assert!(matches!(meta.parse("-1"), Err(ParseError::OutOfRange { .. })));
    }

    #[test]
    fn negative_duration_is_accepted_without_min() {
        let meta = OptionMetadata::duration_in_millis_no_min(5.0);
        assert_eq!(meta.parse("-1"), Ok(OptionValue::Duration(DurationMillis(-1.0))));
    }

    #[test]
    fn float_bounds_are_inclusive_and_rejecting() {
        let meta = OptionMetadata::Float { min: Some(0.0), max: Some(1.0), default: 1.0 };
        assert_eq!(meta.parse("0"), Ok(OptionValue::Float(0.0)));
        assert_eq!(meta.parse("1.0"), Ok(OptionValue::Float(1.0)));
        assert!(matches!(meta.parse("1.5"), Err(ParseError::OutOfRange { .. })));
        assert!(matches!(meta.parse("-0.1"), Err(ParseError::OutOfRange { .. })));
    }

    #[test]
    fn positive_or_zero_int_rejects_negatives() {
        let meta = OptionMetadata::positive_or_zero_int(500);
        assert_eq!(meta.parse("0"), Ok(OptionValue::Int(0)));
        assert!(meta.parse("-1").is_err());
    }

    #[test]
    fn nullable_kinds_default_to_null() {
        assert!(OptionMetadata::NullableString.default_value().is_null());
        assert!(OptionMetadata::NullableWildcardList.default_value().is_null());
        assert!(OptionMetadata::Labels.default_value().is_null());
        assert!(OptionMetadata::LogLevel { default: None }.default_value().is_null());
        assert_eq!(
            OptionMetadata::LogLevel { default: Some(LogLevel::Info) }.default_value(),
            OptionValue::LogLevel(LogLevel::Info)
        );
    }

    #[test]
    fn format_output_parses_back() {
        let meta = OptionMetadata::duration_in_seconds(0.25);
        let default = meta.default_value();
        let raw = meta.format(&default).expect("formatted");
        assert_eq!(raw, "250ms");
        assert_eq!(meta.parse(&raw), Ok(default));
        assert_eq!(OptionMetadata::NullableString.format(&OptionValue::Null), None);
    }
}
