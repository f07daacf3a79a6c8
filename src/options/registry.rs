//! Registry mapping every option name to its metadata

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

use super::metadata::OptionMetadata;
use super::name::OptionName;
use crate::error::ConfigError;
use crate::wildcard::WildcardList;

/// Field names redacted from captured payloads unless overridden.
pub const SANITIZE_FIELD_NAMES_DEFAULT: &str =
    "password, passwd, pwd, secret, *key, *token*, *session*, *credit*, *card*, *auth*, set-cookie";

pub const NON_KEYWORD_STRING_MAX_LENGTH_DEFAULT: i64 = 10 * 1024;
pub const SERVER_TIMEOUT_DEFAULT_SECS: f64 = 30.0;
pub const SPAN_STACK_TRACE_MIN_DURATION_DEFAULT_MS: f64 = 5.0;
pub const STACK_TRACE_LIMIT_DEFAULT: i64 = 50;
pub const TRANSACTION_MAX_SPANS_DEFAULT: i64 = 500;

static SANITIZE_FIELD_NAMES: Lazy<WildcardList> =
    Lazy::new(|| WildcardList::parse(SANITIZE_FIELD_NAMES_DEFAULT));

static GLOBAL: Lazy<OptionRegistry> = Lazy::new(OptionRegistry::new);

/// Metadata the agent ships with for `name`.
pub fn builtin_metadata(name: OptionName) -> OptionMetadata {
    use OptionMetadata as M;
    use OptionName as N;

    match name {
        N::ApiKey
        | N::BootstrapPhpPartFile
        | N::Environment
        | N::ExporterOtlpEndpoint
        | N::Hostname
        | N::LogFile
        | N::SecretToken
        | N::ServiceName
        | N::ServiceNodeName
        | N::ServiceVersion => M::NullableString,

        N::AsyncBackendComm
        | N::AutoloadEnabled
        | N::BreakdownMetrics
        | N::CaptureErrors
        | N::Enabled
        | N::SpanCompressionEnabled
        | N::TransactionSpanEnabled
        | N::TransactionSpanEnabledCli
        | N::VerifyServerCert => M::Bool { default: true },
        N::DisableSend => M::Bool { default: false },

        N::DevInternal | N::DisabledInstrumentations | N::TransactionIgnoreUrls | N::UrlGroups => {
            M::NullableWildcardList
        }
        N::SanitizeFieldNames => M::WildcardList { default: SANITIZE_FIELD_NAMES.clone() },

        N::GlobalLabels => M::Labels,

        N::LogLevel | N::LogLevelFile | N::LogLevelStderr | N::LogLevelSyslog => {
            M::LogLevel { default: None }
        }

        N::NonKeywordStringMaxLength => {
            M::positive_or_zero_int(NON_KEYWORD_STRING_MAX_LENGTH_DEFAULT)
        }
        N::StackTraceLimit => M::Int { min: None, max: None, default: STACK_TRACE_LIMIT_DEFAULT },
        N::TransactionMaxSpans => M::positive_or_zero_int(TRANSACTION_MAX_SPANS_DEFAULT),
        N::TransactionSampleRate => M::Float { min: Some(0.0), max: Some(1.0), default: 1.0 },

        N::ServerTimeout => M::duration_in_seconds(SERVER_TIMEOUT_DEFAULT_SECS),
        N::SpanCompressionExactMatchMaxDuration => M::duration_in_millis(50.0),
        N::SpanCompressionSameKindMaxDuration => M::duration_in_millis(0.0),
        N::SpanStackTraceMinDuration => {
            M::duration_in_millis_no_min(SPAN_STACK_TRACE_MIN_DURATION_DEFAULT_MS)
        }
    }
}

/// Immutable option-name to metadata map.
///
/// [`OptionRegistry::global`] is built on first use and shared for the life of
/// the process. Tests can build isolated instances with
/// [`OptionRegistry::new`] or [`OptionRegistry::from_entries`].
#[derive(Debug, Clone)]
pub struct OptionRegistry {
    entries: BTreeMap<OptionName, OptionMetadata>,
}

impl OptionRegistry {
    pub fn new() -> Self {
        Self { entries: OptionName::ALL.iter().map(|&n| (n, builtin_metadata(n))).collect() }
    }

    pub fn global() -> &'static OptionRegistry {
        &GLOBAL
    }

    /// Build a registry from explicit entries.
    ///
    /// Every [`OptionName`] must appear exactly once, with the same kind as its
    /// built-in metadata. Bounds and defaults may differ.
    pub fn from_entries<I>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (OptionName, OptionMetadata)>,
    {
        let mut map = BTreeMap::new();
        for (name, metadata) in entries {
            let expected = builtin_metadata(name).kind();
            if metadata.kind() != expected {
                return Err(ConfigError::MetadataKindMismatch {
                    option: name,
                    expected,
                    found: metadata.kind(),
                });
            }
            if map.insert(name, metadata).is_some() {
                return Err(ConfigError::DuplicateMetadata(name));
            }
        }
        if let Some(missing) = OptionName::ALL.iter().find(|n| !map.contains_key(*n)) {
            return Err(ConfigError::MissingMetadata(*missing));
        }
        Ok(Self { entries: map })
    }

    pub fn get(&self, name: OptionName) -> &OptionMetadata {
        // Construction guarantees every name is present.
        &self.entries[&name]
    }

    pub fn names(&self) -> impl Iterator<Item = OptionName> + '_ {
        self.entries.keys().copied()
    }

    /// Entries in option-name order.
    pub fn iter(&self) -> impl Iterator<Item = (OptionName, &OptionMetadata)> {
        self.entries.iter().map(|(name, meta)| (*name, meta))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for OptionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
