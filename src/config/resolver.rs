//! Layered option resolution
//!
//! Sources are consulted in the order given; the first one holding a
//! non-blank raw value for an option supplies it. A value that fails to parse
//! is reported and replaced by the option's default rather than falling
//! through to a lower-precedence source.

use std::collections::BTreeMap;

use super::snapshot::{ConfigSnapshot, RejectedValue};
use crate::error::ConfigError;
use crate::options::{OptionName, OptionRegistry};
use crate::sources::{RawSnapshot, RawSource};

pub struct ConfigResolver<'r> {
    registry: &'r OptionRegistry,
}

impl ConfigResolver<'static> {
    pub fn global() -> Self {
        Self::new(OptionRegistry::global())
    }
}

impl<'r> ConfigResolver<'r> {
    pub fn new(registry: &'r OptionRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r OptionRegistry {
        self.registry
    }

    /// Build a snapshot from `sources`, highest precedence first.
    ///
    /// Every source is read before any option is resolved, so an unreadable
    /// source fails the whole pass and no partial snapshot is produced.
    pub fn resolve(&self, sources: &[&dyn RawSource]) -> Result<ConfigSnapshot, ConfigError> {
        tracing::debug!(sources = sources.len(), "resolving options");
        let names: Vec<OptionName> = self.registry.names().collect();

        let mut loaded: Vec<(&str, RawSnapshot)> = Vec::with_capacity(sources.len());
        for source in sources {
            let raw = source.load(&names).map_err(|err| ConfigError::Source {
                source_name: source.name().to_string(),
                source: err,
            })?;
            tracing::debug!(source = source.name(), values = raw.len(), "loaded config source");
            loaded.push((source.name(), raw));
        }

        let mut values = BTreeMap::new();
        let mut origins = BTreeMap::new();
        let mut rejected = Vec::new();

        for (name, meta) in self.registry.iter() {
            let Some((source_name, raw)) = first_supplied(&loaded, name) else {
                tracing::debug!(option = %name, "no source supplies a value, using default");
                values.insert(name, meta.default_value());
                continue;
            };

            match meta.parse(raw) {
                Ok(value) => {
                    tracing::debug!(option = %name, source = source_name, raw, "resolved option");
                    values.insert(name, value);
                    origins.insert(name, source_name.to_string());
                }
                Err(error) => {
                    tracing::warn!(
                        option = %name,
                        source = source_name,
                        raw,
                        error = %error,
                        "invalid option value, falling back to default"
                    );
                    values.insert(name, meta.default_value());
                    rejected.push(RejectedValue {
                        option: name,
                        source: source_name.to_string(),
                        raw: raw.to_string(),
                        error,
                    });
                }
            }
        }

        tracing::debug!(supplied = origins.len(), rejected = rejected.len(), "resolved options");
        Ok(ConfigSnapshot::new(values, origins, rejected))
    }
}

/// First non-blank raw value for `name`, trimmed, with the supplying source's name.
fn first_supplied<'a>(loaded: &'a [(&'a str, RawSnapshot)], name: OptionName) -> Option<(&'a str, &'a str)> {
    loaded.iter().find_map(|(source_name, raw)| {
        raw.get(name).map(str::trim).filter(|value| !value.is_empty()).map(|value| (*source_name, value))
    })
}
