//! # Langpack Config
//!
//! Type-safe configuration for the langpack workspace.
//!
//! Settings are read from YAML, overridden from `LANGPACK_*` environment
//! variables and validated before use.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{ConfigError, ConfigLoader};
pub use settings::{AppConfig, LocalizationSettings};
