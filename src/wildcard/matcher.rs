//! Single wildcard pattern: compilation, canonical form and matching

use serde::{Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Marker that switches a pattern to case-sensitive matching.
///
/// Only recognized at the very start of the pattern; anywhere else it is
/// ordinary literal text.
pub const CASE_SENSITIVE_PREFIX: &str = "(?-i)";

const WILDCARD: char = '*';

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Segment {
    Literal(Vec<char>),
    Wildcard,
}

/// A compiled wildcard pattern.
///
/// Compilation never fails: every string is a valid pattern. Two matchers
/// compare equal when their canonical forms are equal, so `a**b` equals `a*b`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WildcardMatcher {
    case_sensitive: bool,
    segments: Vec<Segment>,
}

impl WildcardMatcher {
    /// Compile `pattern`.
    pub fn new(pattern: &str) -> Self {
        let (case_sensitive, body) = match pattern.strip_prefix(CASE_SENSITIVE_PREFIX) {
            Some(rest) => (true, rest),
            None => (false, pattern),
        };

        let mut segments = Vec::new();
        let mut literal = Vec::new();
        for ch in body.chars() {
            if ch != WILDCARD {
                literal.push(ch);
                continue;
            }
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            if segments.last() != Some(&Segment::Wildcard) {
                segments.push(Segment::Wildcard);
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { case_sensitive, segments }
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Returns true if `text` matches the whole pattern.
    ///
    /// Literal runs must appear in order without overlapping. The first run is
    /// anchored at the start of `text` unless the pattern begins with `*`, and
    /// the last run is anchored at the end unless the pattern ends with `*`.
    pub fn matches(&self, text: &str) -> bool {
        let text: Vec<char> = text.chars().collect();
        let starts_with_wildcard = matches!(self.segments.first(), Some(Segment::Wildcard));
        let ends_with_wildcard = matches!(self.segments.last(), Some(Segment::Wildcard));
        let literals: Vec<&[char]> = self
            .segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Literal(chars) => Some(chars.as_slice()),
                Segment::Wildcard => None,
            })
            .collect();

        // Empty pattern or a lone `*`.
        if literals.is_empty() {
            return starts_with_wildcard || text.is_empty();
        }

        let last_index = literals.len() - 1;
        let mut pos = 0;
        for (index, literal) in literals.iter().enumerate() {
            let anchored_end = index == last_index && !ends_with_wildcard;

            if index == 0 && !starts_with_wildcard {
                if !self.starts_with(&text, literal) {
                    return false;
                }
                pos = literal.len();
                if anchored_end {
                    return pos == text.len();
                }
                continue;
            }

            if anchored_end {
                if text.len() < pos + literal.len() {
                    return false;
                }
                return self.starts_with(&text[text.len() - literal.len()..], literal);
            }

            match self.find(&text, pos, literal) {
                Some(found) => pos = found + literal.len(),
                None => return false,
            }
        }

        true
    }

    fn starts_with(&self, haystack: &[char], needle: &[char]) -> bool {
        haystack.len() >= needle.len()
            && haystack.iter().zip(needle).all(|(&a, &b)| self.chars_equal(a, b))
    }

    fn find(&self, text: &[char], from: usize, needle: &[char]) -> Option<usize> {
        if text.len() < from + needle.len() {
            return None;
        }
        (from..=text.len() - needle.len()).find(|&start| self.starts_with(&text[start..], needle))
    }

    fn chars_equal(&self, a: char, b: char) -> bool {
        a == b || (!self.case_sensitive && a.to_lowercase().eq(b.to_lowercase()))
    }
}

impl fmt::Display for WildcardMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.case_sensitive {
            f.write_str(CASE_SENSITIVE_PREFIX)?;
        }
        for segment in &self.segments {
            match segment {
                Segment::Literal(chars) => {
                    for ch in chars {
                        fmt::Write::write_char(f, *ch)?;
                    }
                }
                Segment::Wildcard => fmt::Write::write_char(f, WILDCARD)?,
            }
        }
        Ok(())
    }
}

impl FromStr for WildcardMatcher {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl Serialize for WildcardMatcher {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
