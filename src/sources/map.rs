//! In-process overrides

use std::collections::BTreeMap;

use super::{RawSnapshot, RawSource};
use crate::error::SourceError;
use crate::options::{OptionName, UnknownOptionName};

/// Raw values supplied directly by the embedding program or by tests.
#[derive(Debug, Clone)]
pub struct MapSource {
    name: String,
    values: BTreeMap<OptionName, String>,
}

impl MapSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), values: BTreeMap::new() }
    }

    pub fn with(mut self, option: OptionName, raw: impl Into<String>) -> Self {
        self.set(option, raw);
        self
    }

    pub fn set(&mut self, option: OptionName, raw: impl Into<String>) {
        self.values.insert(option, raw.into());
    }

    /// Apply a `name=value` assignment, e.g. from a `--set` flag.
    pub fn set_assignment(&mut self, assignment: &str) -> Result<(), UnknownOptionName> {
        let (name, raw) = assignment.split_once('=').unwrap_or((assignment, ""));
        let option = name.trim().parse::<OptionName>()?;
        self.set(option, raw);
        Ok(())
    }
}

impl RawSource for MapSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self, options: &[OptionName]) -> Result<RawSnapshot, SourceError> {
        Ok(options
            .iter()
            .filter_map(|name| self.values.get(name).map(|raw| (*name, raw.clone())))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::MapSource;
    use crate::options::OptionName;
    use crate::sources::RawSource;

    #[test]
    fn assignments_are_keyed_by_option_name() {
        let mut source = MapSource::new("overrides");
        source.set_assignment("transaction_sample_rate=0.5").expect("known option");
        source.set_assignment("url_groups = /api/*, /user/*").expect("known option");

        let snapshot = source.load(OptionName::ALL).expect("load");
        assert_eq!(snapshot.get(OptionName::TransactionSampleRate), Some("0.5"));
        assert_eq!(snapshot.get(OptionName::UrlGroups), Some(" /api/*, /user/*"));
    }

    #[test]
    fn unknown_option_is_rejected() {
        let mut source = MapSource::new("overrides");
        let err = source.set_assignment("no_such=1").expect_err("unknown option");
        assert_eq!(err.0, "no_such");
    }
}
