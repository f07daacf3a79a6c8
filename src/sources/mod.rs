//! Raw-value sources consulted during resolution
//!
//! A source yields un-parsed strings keyed by option name. The resolver decides
//! precedence purely by the order sources are passed in.

pub mod env;
pub mod ini;
pub mod map;

pub use env::EnvVarsSource;
pub use ini::IniFileSource;
pub use map::MapSource;

use std::collections::BTreeMap;

use crate::error::SourceError;
use crate::options::OptionName;

pub trait RawSource {
    /// Identifier used in diagnostics, e.g. `env` or `ini:/etc/php.ini`.
    fn name(&self) -> &str;

    /// Read raw values for `options`. I/O happens here, synchronously.
    fn load(&self, options: &[OptionName]) -> Result<RawSnapshot, SourceError>;
}

/// Raw values produced by one source at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSnapshot {
    values: BTreeMap<OptionName, String>,
}

impl RawSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: OptionName, raw: impl Into<String>) {
        self.values.insert(name, raw.into());
    }

    pub fn get(&self, name: OptionName) -> Option<&str> {
        self.values.get(&name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(OptionName, String)> for RawSnapshot {
    fn from_iter<I: IntoIterator<Item = (OptionName, String)>>(iter: I) -> Self {
        Self { values: iter.into_iter().collect() }
    }
}
