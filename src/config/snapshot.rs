//! Immutable result of a resolution pass

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

use crate::error::ParseError;
use crate::log_level::LogLevel;
use crate::options::{DurationMillis, Labels, OptionName, OptionRegistry, OptionValue};
use crate::wildcard::WildcardList;

/// A raw value that failed to parse and was replaced by the option's default.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedValue {
    pub option: OptionName,
    pub source: String,
    pub raw: String,
    pub error: ParseError,
}

/// Fully parsed option values.
///
/// Never mutated after construction; share it behind an `Arc`. Serializes as
/// a map from option name to value.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSnapshot {
    values: BTreeMap<OptionName, OptionValue>,
    origins: BTreeMap<OptionName, String>,
    rejected: Vec<RejectedValue>,
}

impl ConfigSnapshot {
    pub(crate) fn new(
        values: BTreeMap<OptionName, OptionValue>,
        origins: BTreeMap<OptionName, String>,
        rejected: Vec<RejectedValue>,
    ) -> Self {
        Self { values, origins, rejected }
    }

    /// Snapshot holding every option's default.
    pub fn defaults(registry: &OptionRegistry) -> Self {
        let values = registry.iter().map(|(name, meta)| (name, meta.default_value())).collect();
        Self::new(values, BTreeMap::new(), Vec::new())
    }

    pub fn get(&self, name: OptionName) -> Option<&OptionValue> {
        self.values.get(&name)
    }

    /// Name of the source that supplied `name`, or `None` if it is the default.
    pub fn origin(&self, name: OptionName) -> Option<&str> {
        self.origins.get(&name).map(String::as_str)
    }

    pub fn rejected(&self) -> &[RejectedValue] {
        &self.rejected
    }

    pub fn iter(&self) -> impl Iterator<Item = (OptionName, &OptionValue)> {
        self.values.iter().map(|(name, value)| (*name, value))
    }

    fn bool(&self, name: OptionName) -> bool {
        self.get(name).and_then(OptionValue::as_bool).unwrap_or_default()
    }

    fn int(&self, name: OptionName) -> i64 {
        self.get(name).and_then(OptionValue::as_int).unwrap_or_default()
    }

    fn duration(&self, name: OptionName) -> DurationMillis {
        self.get(name).and_then(OptionValue::as_duration).unwrap_or(DurationMillis(0.0))
    }

    fn string(&self, name: OptionName) -> Option<&str> {
        self.get(name).and_then(OptionValue::as_str)
    }

    fn wildcard_list(&self, name: OptionName) -> Option<&WildcardList> {
        self.get(name).and_then(OptionValue::as_wildcard_list)
    }

    fn level(&self, name: OptionName) -> Option<LogLevel> {
        self.get(name).and_then(OptionValue::as_log_level)
    }

    pub fn api_key(&self) -> Option<&str> {
        self.string(OptionName::ApiKey)
    }

    pub fn async_backend_comm(&self) -> bool {
        self.bool(OptionName::AsyncBackendComm)
    }

    pub fn autoload_enabled(&self) -> bool {
        self.bool(OptionName::AutoloadEnabled)
    }

    pub fn bootstrap_php_part_file(&self) -> Option<&str> {
        self.string(OptionName::BootstrapPhpPartFile)
    }

    pub fn breakdown_metrics(&self) -> bool {
        self.bool(OptionName::BreakdownMetrics)
    }

    pub fn capture_errors(&self) -> bool {
        self.bool(OptionName::CaptureErrors)
    }

    pub fn dev_internal(&self) -> Option<&WildcardList> {
        self.wildcard_list(OptionName::DevInternal)
    }

    pub fn disable_send(&self) -> bool {
        self.bool(OptionName::DisableSend)
    }

    pub fn disabled_instrumentations(&self) -> Option<&WildcardList> {
        self.wildcard_list(OptionName::DisabledInstrumentations)
    }

    pub fn enabled(&self) -> bool {
        self.bool(OptionName::Enabled)
    }

    pub fn environment(&self) -> Option<&str> {
        self.string(OptionName::Environment)
    }

    pub fn exporter_otlp_endpoint(&self) -> Option<&str> {
        self.string(OptionName::ExporterOtlpEndpoint)
    }

    pub fn global_labels(&self) -> Option<&Labels> {
        self.get(OptionName::GlobalLabels).and_then(OptionValue::as_labels)
    }

    pub fn hostname(&self) -> Option<&str> {
        self.string(OptionName::Hostname)
    }

    pub fn log_file(&self) -> Option<&str> {
        self.string(OptionName::LogFile)
    }

    pub fn log_level(&self) -> Option<LogLevel> {
        self.level(OptionName::LogLevel)
    }

    pub fn log_level_file(&self) -> Option<LogLevel> {
        self.level(OptionName::LogLevelFile)
    }

    pub fn log_level_stderr(&self) -> Option<LogLevel> {
        self.level(OptionName::LogLevelStderr)
    }

    pub fn log_level_syslog(&self) -> Option<LogLevel> {
        self.level(OptionName::LogLevelSyslog)
    }

    pub fn non_keyword_string_max_length(&self) -> i64 {
        self.int(OptionName::NonKeywordStringMaxLength)
    }

    /// Always present: the option has a non-null default.
    pub fn sanitize_field_names(&self) -> Option<&WildcardList> {
        self.wildcard_list(OptionName::SanitizeFieldNames)
    }

    pub fn secret_token(&self) -> Option<&str> {
        self.string(OptionName::SecretToken)
    }

    pub fn server_timeout(&self) -> DurationMillis {
        self.duration(OptionName::ServerTimeout)
    }

    pub fn service_name(&self) -> Option<&str> {
        self.string(OptionName::ServiceName)
    }

    pub fn service_node_name(&self) -> Option<&str> {
        self.string(OptionName::ServiceNodeName)
    }

    pub fn service_version(&self) -> Option<&str> {
        self.string(OptionName::ServiceVersion)
    }

    pub fn span_compression_enabled(&self) -> bool {
        self.bool(OptionName::SpanCompressionEnabled)
    }

    pub fn span_compression_exact_match_max_duration(&self) -> DurationMillis {
        self.duration(OptionName::SpanCompressionExactMatchMaxDuration)
    }

    pub fn span_compression_same_kind_max_duration(&self) -> DurationMillis {
        self.duration(OptionName::SpanCompressionSameKindMaxDuration)
    }

    pub fn span_stack_trace_min_duration(&self) -> DurationMillis {
        self.duration(OptionName::SpanStackTraceMinDuration)
    }

    pub fn stack_trace_limit(&self) -> i64 {
        self.int(OptionName::StackTraceLimit)
    }

    pub fn transaction_ignore_urls(&self) -> Option<&WildcardList> {
        self.wildcard_list(OptionName::TransactionIgnoreUrls)
    }

    pub fn transaction_max_spans(&self) -> i64 {
        self.int(OptionName::TransactionMaxSpans)
    }

    pub fn transaction_sample_rate(&self) -> f64 {
        self.get(OptionName::TransactionSampleRate).and_then(OptionValue::as_float).unwrap_or(1.0)
    }

    pub fn transaction_span_enabled(&self) -> bool {
        self.bool(OptionName::TransactionSpanEnabled)
    }

    pub fn transaction_span_enabled_cli(&self) -> bool {
        self.bool(OptionName::TransactionSpanEnabledCli)
    }

    pub fn url_groups(&self) -> Option<&WildcardList> {
        self.wildcard_list(OptionName::UrlGroups)
    }

    pub fn verify_server_cert(&self) -> bool {
        self.bool(OptionName::VerifyServerCert)
    }
}

impl Serialize for ConfigSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.values.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::ConfigSnapshot;
    use crate::options::{OptionName, OptionRegistry};
    use std::collections::BTreeSet;

    #[test]
    fn defaults_snapshot_uses_registry_defaults() {
        let snapshot = ConfigSnapshot::defaults(&OptionRegistry::new());
        assert!(snapshot.enabled());
        assert!(!snapshot.disable_send());
        assert_eq!(snapshot.transaction_sample_rate(), 1.0);
        assert_eq!(snapshot.transaction_max_spans(), 500);
        assert_eq!(snapshot.stack_trace_limit(), 50);
        assert_eq!(snapshot.server_timeout().as_millis(), 30_000.0);
        assert_eq!(snapshot.span_stack_trace_min_duration().as_millis(), 5.0);
        assert!(snapshot.service_name().is_none());
        assert!(snapshot.log_level_stderr().is_none());
        assert!(snapshot.origin(OptionName::Enabled).is_none());
    }

    #[test]
    fn serialized_keys_are_exactly_the_option_names() {
        let snapshot = ConfigSnapshot::defaults(&OptionRegistry::new());
        let json = serde_json::to_value(&snapshot).expect("serialize");
        let keys: BTreeSet<String> =
            json.as_object().expect("object").keys().cloned().collect();
        let names: BTreeSet<String> =
            OptionName::ALL.iter().map(|n| n.as_str().to_string()).collect();
        assert_eq!(keys, names);
        assert_eq!(json["enabled"], serde_json::json!(true));
        assert_eq!(json["service_name"], serde_json::Value::Null);
        assert_eq!(json["sanitize_field_names"][0], serde_json::json!("password"));
    }
}
