//! Glob-style wildcard patterns for list-valued options
//!
//! `*` is the only metacharacter. Matching folds case unless the pattern
//! starts with the `(?-i)` marker.

pub mod list;
pub mod matcher;

pub use list::WildcardList;
pub use matcher::WildcardMatcher;
