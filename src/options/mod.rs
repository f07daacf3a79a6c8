//! Option names, typed metadata and the registry tying them together

pub mod metadata;
pub mod name;
pub mod parse;
pub mod registry;
pub mod value;

pub use metadata::OptionMetadata;
pub use name::{EnvVarPrefix, OptionName, UnknownOptionName};
pub use registry::{OptionRegistry, SANITIZE_FIELD_NAMES_DEFAULT};
pub use value::{DurationMillis, DurationUnit, Labels, OptionValue};
