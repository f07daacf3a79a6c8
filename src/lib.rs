//! otel-options: typed configuration options for an OpenTelemetry agent
//!
//! Options are declared in a closed registry, read as raw strings from layered
//! sources (overrides, environment, ini file), parsed against per-option
//! metadata and published as immutable snapshots. Wildcard patterns used by
//! list-valued options live in [`wildcard`].

pub mod cli;
pub mod config;
pub mod error;
pub mod log_level;
pub mod options;
pub mod sources;
pub mod wildcard;
