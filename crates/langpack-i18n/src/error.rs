//! Error types for internationalization operations

use std::path::PathBuf;
use thiserror::Error;
use tracing::{error, info, trace, warn};

/// Errors that can occur during internationalization operations.
///
/// None of these ever reach the host application as a failure: the public
/// operations of [`crate::LocalizationManager`] log them and continue in a
/// degraded state.
#[derive(Error, Debug)]
pub enum I18nError {
    /// A language folder, catalog or mapping file is absent
    #[error("Missing resource: {}", path.display())]
    MissingResource { path: PathBuf },

    /// A catalog line that is neither a comment, a section nor an entry
    #[error("Malformed line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },

    /// A switch request for a language that is not installed
    #[error("Unsupported language: {code}")]
    UnsupportedLanguage { code: String },

    /// Reading or writing a backing file failed
    #[error("Persistence failure on {}: {source}", path.display())]
    PersistenceFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl I18nError {
    /// Build the matching error for an I/O failure on `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::MissingResource { path }
        } else {
            Self::PersistenceFailure { path, source }
        }
    }

    /// Whether the error only says that something is not there.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::MissingResource { .. })
    }

    /// Log the error at the level its kind calls for and drop it.
    pub fn report(&self, context: &str) {
        match self {
            Self::MissingResource { .. } | Self::UnsupportedLanguage { .. } => {
                warn!("{}: {}", context, self);
            }
            Self::MalformedLine { .. } => trace!("{}: {}", context, self),
            Self::PersistenceFailure { .. } => error!("{}: {}", context, self),
        }
    }

    /// Like [`Self::report`], but a missing resource is only informational.
    pub fn report_optional(&self, context: &str) {
        if self.is_missing() {
            info!("{}: {}", context, self);
        } else {
            self.report(context);
        }
    }
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;
