//! Comma-separated lists of wildcard patterns

use super::matcher::WildcardMatcher;
use serde::{Serialize, Serializer};
use std::fmt;

/// Ordered list of compiled patterns.
///
/// Entries are trimmed but never dropped: `"a,,b"` holds three patterns and
/// the middle one matches only the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WildcardList {
    matchers: Vec<WildcardMatcher>,
}

impl WildcardList {
    pub fn parse(raw: &str) -> Self {
        raw.split(',').map(str::trim).map(WildcardMatcher::new).collect()
    }

    pub fn matchers(&self) -> &[WildcardMatcher] {
        &self.matchers
    }

    pub fn get(&self, index: usize) -> Option<&WildcardMatcher> {
        self.matchers.get(index)
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WildcardMatcher> {
        self.matchers.iter()
    }

    /// First pattern (in declaration order) that matches `text`.
    pub fn first_match(&self, text: &str) -> Option<&WildcardMatcher> {
        self.matchers.iter().find(|matcher| matcher.matches(text))
    }

    pub fn any_matches(&self, text: &str) -> bool {
        self.first_match(text).is_some()
    }
}

impl FromIterator<WildcardMatcher> for WildcardList {
    fn from_iter<I: IntoIterator<Item = WildcardMatcher>>(iter: I) -> Self {
        Self { matchers: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a WildcardList {
    type Item = &'a WildcardMatcher;
    type IntoIter = std::slice::Iter<'a, WildcardMatcher>;

    fn into_iter(self) -> Self::IntoIter {
        self.matchers.iter()
    }
}

impl fmt::Display for WildcardList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, matcher) in self.matchers.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{matcher}")?;
        }
        Ok(())
    }
}

impl Serialize for WildcardList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.matchers.iter())
    }
}
