//! Environment variable source

use std::collections::HashMap;
use std::env::VarError;

use super::{RawSnapshot, RawSource};
use crate::error::SourceError;
use crate::options::OptionName;

/// Reads `<PREFIX><OPTION_NAME>` variables, e.g. `ELASTIC_OTEL_ENABLED`.
#[derive(Debug, Clone, Default)]
pub struct EnvVarsSource {
    vars: Option<HashMap<String, String>>,
}

impl EnvVarsSource {
    /// Source backed by the process environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Source backed by a fixed set of variables instead of the process environment.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self { vars: Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect()) }
    }

    fn lookup(&self, key: &str) -> Option<String> {
        if let Some(vars) = &self.vars {
            return vars.get(key).cloned();
        }
        match std::env::var(key) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                tracing::warn!(var = key, "ignoring environment variable that is not valid UTF-8");
                None
            }
        }
    }
}

impl RawSource for EnvVarsSource {
    fn name(&self) -> &str {
        "env"
    }

    fn load(&self, options: &[OptionName]) -> Result<RawSnapshot, SourceError> {
        Ok(options
            .iter()
            .filter_map(|name| self.lookup(&name.env_var_name()).map(|raw| (*name, raw)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::EnvVarsSource;
    use crate::options::OptionName;
    use crate::sources::RawSource;

    #[test]
    fn reads_prefixed_variables() {
        let source = EnvVarsSource::from_vars([
            ("ELASTIC_OTEL_ENABLED", "false"),
            ("OTEL_PHP_AUTOLOAD_ENABLED", "no"),
            ("ENABLED", "ignored"),
        ]);
        let snapshot = source.load(OptionName::ALL).expect("env never fails");
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get(OptionName::Enabled), Some("false"));
        assert_eq!(snapshot.get(OptionName::AutoloadEnabled), Some("no"));
    }

    #[test]
    fn only_requested_options_are_read() {
        let source = EnvVarsSource::from_vars([("ELASTIC_OTEL_ENABLED", "false")]);
        let snapshot = source.load(&[OptionName::ServiceName]).expect("env never fails");
        assert!(snapshot.is_empty());
    }
}
