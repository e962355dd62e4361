//! Application-wide error types using thiserror.

use langpack_common::LangpackError;
use langpack_config::ConfigError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Configuration file could not be loaded.
    #[error("Configuration loading failed: {0}")]
    ConfigLoad(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error(transparent)]
    Logging(#[from] LangpackError),

    /// The requested language is not installed.
    #[error("Language '{0}' is not installed")]
    UnsupportedLanguage(String),

    /// I/O error while writing command output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the application.
pub type AppResult<T> = Result<T, AppError>;
