//! Errors raised while bootstrapping langpack: configuration values, the
//! logging setup and the I/O behind them.
//!
//! Localization faults never surface here; the i18n crate reports and
//! absorbs them itself.

use thiserror::Error;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for langpack operations
pub type Result<T> = std::result::Result<T, LangpackError>;

/// Startup error shared by the langpack crates
#[derive(Error, Debug)]
pub enum LangpackError {
    /// A configuration value cannot be used
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// A single field failed validation
    #[error("Invalid value for {}: {message}", .field.as_deref().unwrap_or("input"))]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// The log sink or subscriber could not be set up
    #[error("Logging setup failed: {message}")]
    Logging {
        message: String,
        #[source]
        source: BoxedSource,
    },

    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LangpackError {
    /// Configuration error without an underlying cause
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Configuration error wrapping `source`
    pub fn config_with_source(msg: impl Into<String>, source: impl Into<BoxedSource>) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(source.into()),
        }
    }

    /// Validation error for `field`
    pub fn validation(msg: impl Into<String>, field: Option<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field,
        }
    }

    /// Logging setup error wrapping `source`
    pub fn logging(msg: impl Into<String>, source: impl Into<BoxedSource>) -> Self {
        Self::Logging {
            message: msg.into(),
            source: source.into(),
        }
    }

    /// Whether the user can fix this by editing the configuration
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. } | Self::Validation { .. })
    }
}
