//! End-to-end resolution across layered sources

use otel_options::config::{ConfigResolver, SnapshotCell};
use otel_options::error::{ConfigError, ParseError, SourceError};
use otel_options::log_level::LogLevel;
use otel_options::options::{OptionName, OptionValue};
use otel_options::sources::{EnvVarsSource, IniFileSource, MapSource, RawSource};
use std::fs;
use tempfile::TempDir;
use tracing_test::traced_test;

#[test]
fn overrides_beat_env_which_beats_ini() {
    let tmp = TempDir::new().expect("tmp");
    let ini_path = tmp.path().join("agent.ini");
    fs::write(
        &ini_path,
        "elastic_otel.enabled = true\n\
         elastic_otel.service_name = from-ini\n\
         elastic_otel.environment = staging\n",
    )
    .expect("write");

    let overrides = MapSource::new("cli").with(OptionName::ServiceName, "from-cli");
    let env = EnvVarsSource::from_vars([
        ("ELASTIC_OTEL_ENABLED", "false"),
        ("ELASTIC_OTEL_SERVICE_NAME", "from-env"),
    ]);
    let ini = IniFileSource::new(&ini_path);
    let sources: [&dyn RawSource; 3] = [&overrides, &env, &ini];

    let snapshot = ConfigResolver::global().resolve(&sources).expect("resolve");
    assert!(!snapshot.enabled());
    assert_eq!(snapshot.service_name(), Some("from-cli"));
    assert_eq!(snapshot.environment(), Some("staging"));
    assert_eq!(snapshot.origin(OptionName::Enabled), Some("env"));
    assert!(snapshot.origin(OptionName::Environment).is_some_and(|o| o.starts_with("ini:")));
    assert!(snapshot.rejected().is_empty());
}

#[test]
fn unset_options_take_defaults() {
    let env = EnvVarsSource::from_vars(Vec::<(String, String)>::new());
    let snapshot = ConfigResolver::global().resolve(&[&env]).expect("resolve");

    assert_eq!(snapshot.transaction_sample_rate(), 1.0);
    assert!(snapshot.enabled());
    assert!(snapshot.verify_server_cert());
    assert!(snapshot.url_groups().is_none());
    assert!(snapshot.global_labels().is_none());
    assert_eq!(
        snapshot.sanitize_field_names().map(ToString::to_string).as_deref(),
        Some(otel_options::options::SANITIZE_FIELD_NAMES_DEFAULT)
    );
}

#[test]
fn env_wildcard_list_replaces_default() {
    let env = EnvVarsSource::from_vars([("ELASTIC_OTEL_SANITIZE_FIELD_NAMES", "foo,*bar*")]);
    let snapshot = ConfigResolver::global().resolve(&[&env]).expect("resolve");

    let list = snapshot.sanitize_field_names().expect("non-null list");
    assert_eq!(list.len(), 2);
    let foo = list.get(0).expect("first pattern");
    let bar = list.get(1).expect("second pattern");
    assert!(foo.matches("foo"));
    assert!(!foo.matches("foobar"));
    assert!(bar.matches("xxbarxx"));
    assert!(list.any_matches("FOO"));
    assert!(list.any_matches("xbarx"));
    assert!(!list.any_matches("password"));
}

#[test]
fn durations_honour_default_unit_and_suffixes() {
    let env = EnvVarsSource::from_vars([
        ("ELASTIC_OTEL_SERVER_TIMEOUT", "30"),
        ("ELASTIC_OTEL_SPAN_COMPRESSION_EXACT_MATCH_MAX_DURATION", "2s"),
        ("ELASTIC_OTEL_SPAN_STACK_TRACE_MIN_DURATION", "-1"),
    ]);
    let snapshot = ConfigResolver::global().resolve(&[&env]).expect("resolve");

    assert_eq!(snapshot.server_timeout().as_millis(), 30_000.0);
    assert_eq!(snapshot.server_timeout().as_secs_f64(), 30.0);
    assert_eq!(snapshot.span_compression_exact_match_max_duration().as_millis(), 2_000.0);
    assert_eq!(snapshot.span_stack_trace_min_duration().as_millis(), -1.0);
}

#[test]
fn invalid_values_fall_back_to_defaults_and_are_reported() {
    let env = EnvVarsSource::from_vars([
        ("ELASTIC_OTEL_SERVER_TIMEOUT", "-5"),
        ("ELASTIC_OTEL_TRANSACTION_SAMPLE_RATE", "1.5"),
        ("ELASTIC_OTEL_ENABLED", "maybe"),
        ("ELASTIC_OTEL_LOG_LEVEL_STDERR", "chatty"),
    ]);
    let snapshot = ConfigResolver::global().resolve(&[&env]).expect("resolve");

    assert_eq!(snapshot.server_timeout().as_millis(), 30_000.0);
    assert_eq!(snapshot.transaction_sample_rate(), 1.0);
    assert!(snapshot.enabled());
    assert!(snapshot.log_level_stderr().is_none());

    let mut rejected: Vec<OptionName> = snapshot.rejected().iter().map(|r| r.option).collect();
    rejected.sort();
    assert_eq!(
        rejected,
        vec![
            OptionName::Enabled,
            OptionName::LogLevelStderr,
            OptionName::ServerTimeout,
            OptionName::TransactionSampleRate,
        ]
    );
    assert!(snapshot
        .rejected()
        .iter()
        .any(|r| matches!(r.error, ParseError::OutOfRange { .. }) && r.raw == "1.5"));
}

#[test]
fn log_levels_and_labels_parse() {
    let env = EnvVarsSource::from_vars([
        ("ELASTIC_OTEL_LOG_LEVEL", "DEBUG"),
        ("ELASTIC_OTEL_LOG_LEVEL_FILE", "warning"),
        ("ELASTIC_OTEL_GLOBAL_LABELS", "team=core, env=prod"),
    ]);
    let snapshot = ConfigResolver::global().resolve(&[&env]).expect("resolve");

    assert_eq!(snapshot.log_level(), Some(LogLevel::Debug));
    assert_eq!(snapshot.log_level_file(), Some(LogLevel::Warning));
    let labels = snapshot.global_labels().expect("labels");
    assert_eq!(labels.get("team").map(String::as_str), Some("core"));
    assert_eq!(labels.get("env").map(String::as_str), Some("prod"));
    assert_eq!(
        snapshot.get(OptionName::GlobalLabels).map(ToString::to_string).as_deref(),
        Some("env=prod,team=core")
    );
}

#[test]
fn prefixes_other_than_elastic_otel_are_read() {
    let env = EnvVarsSource::from_vars([
        ("OTEL_EXPORTER_OTLP_ENDPOINT", "http://collector:4318"),
        ("OTEL_PHP_AUTOLOAD_ENABLED", "false"),
        ("OTEL_PHP_DISABLED_INSTRUMENTATIONS", "curl, pdo*"),
        ("ELASTIC_OTEL_EXPORTER_OTLP_ENDPOINT", "ignored"),
    ]);
    let snapshot = ConfigResolver::global().resolve(&[&env]).expect("resolve");

    assert_eq!(snapshot.exporter_otlp_endpoint(), Some("http://collector:4318"));
    assert!(!snapshot.autoload_enabled());
    let disabled = snapshot.disabled_instrumentations().expect("list");
    assert!(disabled.any_matches("PDO_mysql"));
}

#[test]
fn unreadable_ini_fails_the_whole_resolution() {
    let tmp = TempDir::new().expect("tmp");
    let ini = IniFileSource::new(tmp.path().join("nope.ini"));
    let env = EnvVarsSource::from_vars([("ELASTIC_OTEL_ENABLED", "false")]);
    let sources: [&dyn RawSource; 2] = [&env, &ini];

    let err = ConfigResolver::global().resolve(&sources).expect_err("missing ini");
    assert!(matches!(err, ConfigError::Source { source: SourceError::Io { .. }, .. }));
}

#[test]
fn snapshot_serializes_as_map_of_option_names() {
    let overrides = MapSource::new("cli")
        .with(OptionName::ServerTimeout, "1.5s")
        .with(OptionName::UrlGroups, "/a/*, /b/*");
    let snapshot = ConfigResolver::global().resolve(&[&overrides]).expect("resolve");

    let json = serde_json::to_value(&snapshot).expect("serialize");
    assert_eq!(json["server_timeout"], serde_json::json!(1500.0));
    assert_eq!(json["url_groups"], serde_json::json!(["/a/*", "/b/*"]));
    assert_eq!(json["api_key"], serde_json::Value::Null);
}

#[test]
fn published_snapshot_replaces_previous_one() {
    let first = ConfigResolver::global().resolve(&[]).expect("resolve");
    let cell = SnapshotCell::new(first);
    let held = cell.current();

    let overrides = MapSource::new("reload").with(OptionName::TransactionMaxSpans, "10");
    cell.publish(ConfigResolver::global().resolve(&[&overrides]).expect("resolve"));

    assert_eq!(held.transaction_max_spans(), 500);
    assert_eq!(cell.current().transaction_max_spans(), 10);
    assert_eq!(
        cell.current().get(OptionName::TransactionMaxSpans),
        Some(&OptionValue::Int(10))
    );
}

#[test]
#[traced_test]
fn rejected_values_and_malformed_labels_are_logged() {
    let env = EnvVarsSource::from_vars([
        ("ELASTIC_OTEL_STACK_TRACE_LIMIT", "many"),
        ("ELASTIC_OTEL_GLOBAL_LABELS", "ok=1, broken"),
    ]);
    let snapshot = ConfigResolver::global().resolve(&[&env]).expect("resolve");

    assert_eq!(snapshot.stack_trace_limit(), 50);
    assert_eq!(snapshot.global_labels().map(|labels| labels.len()), Some(1));
    assert!(logs_contain("invalid option value, falling back to default"));
    assert!(logs_contain("stack_trace_limit"));
    assert!(logs_contain("dropping malformed label"));
}

#[test]
fn overflowing_duration_is_rejected_instead_of_becoming_infinite() {
    let overrides = MapSource::new("cli").with(OptionName::ServerTimeout, "1e306m");
    let snapshot = ConfigResolver::global().resolve(&[&overrides]).expect("resolve");

    assert_eq!(snapshot.server_timeout().as_millis(), 30_000.0);
    let rejected = snapshot.rejected();
    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0].option, OptionName::ServerTimeout);
    assert!(matches!(rejected[0].error, ParseError::InvalidDuration { .. }));

    let json = serde_json::to_value(&snapshot).expect("serialize");
    assert_eq!(json["server_timeout"], serde_json::json!(30000.0));
}
