//! Option resolution and snapshot publication
//!
//! Sources are layered by the caller, highest precedence first (typically
//! CLI overrides > environment > ini file), and anything left unset takes the
//! registry default.

pub mod cell;
pub mod resolver;
pub mod snapshot;

pub use cell::SnapshotCell;
pub use resolver::ConfigResolver;
pub use snapshot::{ConfigSnapshot, RejectedValue};
