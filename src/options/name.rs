//! The closed set of option names and their external spellings

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Namespace prefix an option's environment variable is formed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EnvVarPrefix {
    Otel,
    OtelPhp,
    ElasticOtel,
}

impl EnvVarPrefix {
    pub const ALL: [EnvVarPrefix; 3] =
        [EnvVarPrefix::Otel, EnvVarPrefix::OtelPhp, EnvVarPrefix::ElasticOtel];

    pub fn as_str(self) -> &'static str {
        match self {
            EnvVarPrefix::Otel => "OTEL_",
            EnvVarPrefix::OtelPhp => "OTEL_PHP_",
            EnvVarPrefix::ElasticOtel => "ELASTIC_OTEL_",
        }
    }

    /// Section used for ini keys, e.g. `elastic_otel` in `elastic_otel.enabled`.
    pub fn ini_section(self) -> &'static str {
        match self {
            EnvVarPrefix::Otel => "otel",
            EnvVarPrefix::OtelPhp => "otel_php",
            EnvVarPrefix::ElasticOtel => "elastic_otel",
        }
    }
}

macro_rules! option_names {
    ($($variant:ident => $name:literal,)+) => {
        /// Every configuration option the agent understands.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum OptionName {
            $($variant,)+
        }

        impl OptionName {
            pub const ALL: &'static [OptionName] = &[$(OptionName::$variant,)+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(OptionName::$variant => $name,)+
                }
            }
        }

        impl FromStr for OptionName {
            type Err = UnknownOptionName;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(OptionName::$variant),)+
                    other => Err(UnknownOptionName(other.to_string())),
                }
            }
        }
    };
}

option_names! {
    ApiKey => "api_key",
    AsyncBackendComm => "async_backend_comm",
    AutoloadEnabled => "autoload_enabled",
    BootstrapPhpPartFile => "bootstrap_php_part_file",
    BreakdownMetrics => "breakdown_metrics",
    CaptureErrors => "capture_errors",
    DevInternal => "dev_internal",
    DisableSend => "disable_send",
    DisabledInstrumentations => "disabled_instrumentations",
    Enabled => "enabled",
    Environment => "environment",
    ExporterOtlpEndpoint => "exporter_otlp_endpoint",
    GlobalLabels => "global_labels",
    Hostname => "hostname",
    LogFile => "log_file",
    LogLevel => "log_level",
    LogLevelFile => "log_level_file",
    LogLevelStderr => "log_level_stderr",
    LogLevelSyslog => "log_level_syslog",
    NonKeywordStringMaxLength => "non_keyword_string_max_length",
    SanitizeFieldNames => "sanitize_field_names",
    SecretToken => "secret_token",
    ServerTimeout => "server_timeout",
    ServiceName => "service_name",
    ServiceNodeName => "service_node_name",
    ServiceVersion => "service_version",
    SpanCompressionEnabled => "span_compression_enabled",
    SpanCompressionExactMatchMaxDuration => "span_compression_exact_match_max_duration",
    SpanCompressionSameKindMaxDuration => "span_compression_same_kind_max_duration",
    SpanStackTraceMinDuration => "span_stack_trace_min_duration",
    StackTraceLimit => "stack_trace_limit",
    TransactionIgnoreUrls => "transaction_ignore_urls",
    TransactionMaxSpans => "transaction_max_spans",
    TransactionSampleRate => "transaction_sample_rate",
    TransactionSpanEnabled => "transaction_span_enabled",
    TransactionSpanEnabledCli => "transaction_span_enabled_cli",
    UrlGroups => "url_groups",
    VerifyServerCert => "verify_server_cert",
}

impl OptionName {
    pub fn env_var_prefix(self) -> EnvVarPrefix {
        match self {
            OptionName::ExporterOtlpEndpoint => EnvVarPrefix::Otel,
            OptionName::AutoloadEnabled | OptionName::DisabledInstrumentations => {
                EnvVarPrefix::OtelPhp
            }
            _ => EnvVarPrefix::ElasticOtel,
        }
    }

    /// e.g. `ELASTIC_OTEL_TRANSACTION_SAMPLE_RATE`
    pub fn env_var_name(self) -> String {
        format!("{}{}", self.env_var_prefix().as_str(), self.as_str().to_ascii_uppercase())
    }

    /// e.g. `elastic_otel.transaction_sample_rate`
    pub fn ini_key(self) -> String {
        format!("{}.{}", self.env_var_prefix().ini_section(), self.as_str())
    }

    pub fn is_log_level_related(self) -> bool {
        matches!(
            self,
            OptionName::LogLevel
                | OptionName::LogLevelFile
                | OptionName::LogLevelStderr
                | OptionName::LogLevelSyslog
        )
    }
}

impl fmt::Display for OptionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for OptionName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown option `{0}`")]
pub struct UnknownOptionName(pub String);
