//! # Langpack Common
//!
//! Shared types, errors and logging for the langpack workspace.
//!
//! This crate provides the foundational pieces used across all other
//! crates: the [`LanguageCode`] identifier, the application-level
//! [`LangpackError`], and the `tracing` bootstrap.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{LangpackError, Result};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use types::LanguageCode;
