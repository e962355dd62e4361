//! Application configuration structures

use langpack_common::{LanguageCode, LoggingConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::{Validate, ValidationError, ValidationErrors};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where language packs live and how they are named
    pub localization: LocalizationSettings,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Locale storage layout and startup defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LocalizationSettings {
    /// Directory holding one sub-folder per installed language
    pub locale_root: PathBuf,

    /// Catalog file name inside each language folder
    #[validate(custom = "crate::validation::validate_file_name")]
    pub catalog_file: String,

    /// `langCode=countryCode` mapping file name inside the locale root
    #[validate(custom = "crate::validation::validate_file_name")]
    pub mapping_file: String,

    /// File holding the last chosen language code
    pub preference_file: PathBuf,

    /// Hard fallback when neither a saved preference nor the system locale
    /// matches an installed language
    #[validate(length(min = 1, message = "Default language cannot be empty"))]
    #[validate(custom = "crate::validation::validate_language_code")]
    pub default_language: String,
}

impl Default for LocalizationSettings {
    fn default() -> Self {
        Self {
            locale_root: PathBuf::from("locale"),
            catalog_file: "base.ini".to_string(),
            mapping_file: "language_mapping.cfg".to_string(),
            preference_file: PathBuf::from("user").join("language.save"),
            default_language: "en".to_string(),
        }
    }
}

impl LocalizationSettings {
    /// Settings rooted at `locale_root`, everything else default.
    pub fn with_root(locale_root: impl Into<PathBuf>) -> Self {
        Self {
            locale_root: locale_root.into(),
            ..Self::default()
        }
    }

    /// Replace the preference file location.
    #[must_use]
    pub fn preference_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.preference_file = path.into();
        self
    }

    /// Replace the default language.
    #[must_use]
    pub fn default_language(mut self, code: impl Into<String>) -> Self {
        self.default_language = code.into();
        self
    }

    /// The default language as a typed code.
    pub fn default_code(&self) -> LanguageCode {
        LanguageCode::new(self.default_language.clone())
    }

    /// `{root}/{code}`
    pub fn language_dir(&self, code: &LanguageCode) -> PathBuf {
        self.locale_root.join(code.as_str())
    }

    /// `{root}/{code}/{catalog_file}`
    pub fn catalog_path(&self, code: &LanguageCode) -> PathBuf {
        self.language_dir(code).join(&self.catalog_file)
    }

    /// `{root}/{mapping_file}`
    pub fn mapping_path(&self) -> PathBuf {
        self.locale_root.join(&self.mapping_file)
    }

    /// The locale root directory
    pub fn locale_root(&self) -> &Path {
        &self.locale_root
    }
}

impl AppConfig {
    /// Comprehensive validation of the entire configuration
    pub fn validate_all(&self) -> Result<(), ValidationErrors> {
        self.localization.validate()?;

        let mut errors = ValidationErrors::new();
        if self.localization.locale_root.as_os_str().is_empty() {
            errors.add("locale_root", ValidationError::new("empty_locale_root"));
        }
        if self.localization.preference_file.file_name().is_none() {
            errors.add("preference_file", ValidationError::new("invalid_preference_file"));
        }
        if self.logging.level.trim().is_empty() {
            errors.add("level", ValidationError::new("empty_log_level"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
