//! Language to country code mapping
//!
//! `language_mapping.cfg` uses the catalog line format without sections:
//!
//! ```text
//! # flags shown next to each language
//! en = us
//! ko = kr
//! ```

use crate::catalog::{classify, scan_lines, Line};
use crate::error::I18nResult;
use langpack_common::LanguageCode;
use std::collections::HashMap;
use std::ops::ControlFlow;
use std::path::Path;
use tracing::{debug, info, trace};

/// Immutable `language -> country` table, loaded once at startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryMapping {
    countries: HashMap<LanguageCode, String>,
}

impl CountryMapping {
    /// Parse mapping text
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut mapping = Self::default();
        for (index, line) in text.lines().enumerate() {
            mapping.feed(index + 1, line);
        }
        mapping
    }

    /// Read the mapping file at `path`
    pub fn try_load(path: &Path) -> I18nResult<Self> {
        let mut mapping = Self::default();
        scan_lines(path, |number, line| {
            mapping.feed(number, line);
            ControlFlow::Continue(())
        })?;
        info!("Loaded {} language mappings from {:?}", mapping.len(), path);
        Ok(mapping)
    }

    /// Read the mapping file, falling back to an empty table
    #[must_use]
    pub fn load(path: &Path) -> Self {
        Self::try_load(path).unwrap_or_else(|e| {
            e.report_optional("Language mapping unavailable, using identity mapping");
            Self::default()
        })
    }

    fn feed(&mut self, number: usize, raw: &str) {
        match classify(raw) {
            Line::Entry { key, value } => {
                debug!("Language mapping: {} -> {}", key, value);
                self.countries.insert(LanguageCode::new(key), value.to_string());
            }
            Line::Skip => {}
            Line::Section(_) | Line::Malformed => {
                trace!("Ignoring mapping line {}: {:?}", number, raw.trim());
            }
        }
    }

    /// Country code for `language`, or the language code itself when unmapped
    #[must_use]
    pub fn country_code(&self, language: &str) -> String {
        self.countries
            .get(language)
            .cloned()
            .unwrap_or_else(|| language.to_string())
    }

    /// Whether `language` has an explicit mapping
    #[must_use]
    pub fn contains(&self, language: &str) -> bool {
        self.countries.contains_key(language)
    }

    /// Number of mapped languages
    #[must_use]
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Whether nothing is mapped
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}
