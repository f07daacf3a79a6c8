//! Ini-style file source
//!
//! Recognizes `key = value` lines where keys are option ini keys such as
//! `elastic_otel.enabled`. `;` and `#` start comment lines, `[section]` headers
//! are ignored, and a value wrapped in matching quotes is unquoted.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{RawSnapshot, RawSource};
use crate::error::SourceError;
use crate::options::OptionName;

static ASSIGNMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z0-9_.\-]+)\s*=\s*(.*)$").expect("valid ini regex"));

pub struct IniFileSource {
    path: PathBuf,
    name: String,
}

impl IniFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = format!("ini:{}", path.display());
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RawSource for IniFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self, options: &[OptionName]) -> Result<RawSnapshot, SourceError> {
        let content = fs::read_to_string(&self.path)
            .map_err(|source| SourceError::Io { path: self.path.clone(), source })?;
        let mut entries = parse_ini(&content, &self.path)?;

        let mut snapshot = RawSnapshot::new();
        for name in options {
            if let Some(raw) = entries.remove(&name.ini_key()) {
                snapshot.insert(*name, raw);
            }
        }
        for key in entries.keys() {
            tracing::debug!(key = %key, file = %self.path.display(), "ignoring unknown ini key");
        }
        Ok(snapshot)
    }
}

/// Parse ini content into lower-cased keys and unquoted values.
///
/// Later assignments to the same key override earlier ones.
fn parse_ini(content: &str, path: &Path) -> Result<HashMap<String, String>, SourceError> {
    let mut entries = HashMap::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }
        if line.starts_with('[') && line.ends_with(']') {
            continue;
        }
        let caps = ASSIGNMENT.captures(line).ok_or_else(|| SourceError::Syntax {
            path: path.to_path_buf(),
            line: index + 1,
            text: line.to_string(),
        })?;
        entries.insert(caps[1].to_ascii_lowercase(), unquote(caps[2].trim()).to_string());
    }
    Ok(entries)
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
