//! Display names of languages, in their own language

use crate::catalog::{classify, scan_lines, Line, LANGUAGE_NAME_KEY, SYSTEM_CATEGORY};
use crate::error::I18nResult;
use langpack_common::LanguageCode;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::ops::ControlFlow;
use std::path::Path;
use tracing::debug;

/// Resolves `[system] language_name` per language and caches every answer,
/// including the upper-cased fallback, so each language is read at most once.
#[derive(Debug, Default)]
pub struct NativeNameResolver {
    cache: RefCell<HashMap<LanguageCode, String>>,
    reads: Cell<usize>,
}

impl NativeNameResolver {
    /// Create an empty resolver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Native name of `code`, reading `catalog_path` on a cache miss.
    pub fn resolve(&self, code: &LanguageCode, catalog_path: &Path) -> String {
        if let Some(name) = self.cache.borrow().get(code) {
            return name.clone();
        }

        let name = match self.scan(catalog_path) {
            Ok(Some(name)) => name,
            Ok(None) => {
                debug!("No native name for {}, using code", code);
                code.to_uppercase()
            }
            Err(e) => {
                e.report("Reading language name");
                code.to_uppercase()
            }
        };

        self.cache.borrow_mut().insert(code.clone(), name.clone());
        name
    }

    /// First `language_name` inside a `[system]` section, even when empty.
    fn scan(&self, catalog_path: &Path) -> I18nResult<Option<String>> {
        self.reads.set(self.reads.get() + 1);

        let mut in_system = false;
        let mut found = None;
        scan_lines(catalog_path, |_, line| match classify(line) {
            Line::Section(name) => {
                in_system = name == SYSTEM_CATEGORY;
                ControlFlow::Continue(())
            }
            Line::Entry { key, value } if in_system && key == LANGUAGE_NAME_KEY => {
                found = Some(value.to_string());
                ControlFlow::Break(())
            }
            _ => ControlFlow::Continue(()),
        })?;

        Ok(found)
    }

    /// Whether `code` already has a cached name
    pub fn is_cached(&self, code: &str) -> bool {
        self.cache.borrow().contains_key(code)
    }

    /// How many times a catalog file was opened for a name lookup
    pub fn disk_reads(&self) -> usize {
        self.reads.get()
    }

    /// Drop every cached name
    pub fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use langpack_common::test_utils::LocaleFixture;

    fn resolve(fixture: &LocaleFixture, resolver: &NativeNameResolver, code: &str) -> String {
        let code = LanguageCode::new(code);
        resolver.resolve(&code, &fixture.root().join(code.as_str()).join("base.ini"))
    }

    #[test]
    fn test_reads_system_language_name() {
        let fixture =
            LocaleFixture::new().with_language("ko", "[system]\nlanguage_name = 한국어\n");
        let resolver = NativeNameResolver::new();
        assert_eq!(resolve(&fixture, &resolver, "ko"), "한국어");
    }

    #[test]
    fn test_first_match_wins() {
        let fixture = LocaleFixture::new().with_language(
            "de",
            "[system]\nlanguage_name = Deutsch\nlanguage_name = Later\n",
        );
        let resolver = NativeNameResolver::new();
        assert_eq!(resolve(&fixture, &resolver, "de"), "Deutsch");
    }

    #[test]
    fn test_empty_first_match_stops_scan() {
        let fixture = LocaleFixture::new()
            .with_language("de", "[system]\nlanguage_name =\nlanguage_name = Later\n");
        let resolver = NativeNameResolver::new();
        assert_eq!(resolve(&fixture, &resolver, "de"), "");
        assert!(resolver.is_cached("de"));
    }

    #[test]
    fn test_key_outside_system_section_ignored() {
        let fixture = LocaleFixture::new()
            .with_language("fr", "[main_menu]\nlanguage_name = Wrong\n[system]\nother = x\n");
        let resolver = NativeNameResolver::new();
        assert_eq!(resolve(&fixture, &resolver, "fr"), "FR");
    }

    #[test]
    fn test_missing_file_falls_back_to_uppercase() {
        let fixture = LocaleFixture::new().with_empty_language("pt");
        let resolver = NativeNameResolver::new();
        assert_eq!(resolve(&fixture, &resolver, "pt"), "PT");
        assert!(resolver.is_cached("pt"));
    }

    #[test]
    fn test_second_call_hits_cache() {
        let fixture =
            LocaleFixture::new().with_language("ja", "[system]\nlanguage_name = 日本語\n");
        let resolver = NativeNameResolver::new();

        assert_eq!(resolve(&fixture, &resolver, "ja"), "日本語");
        std::fs::remove_file(fixture.root().join("ja/base.ini")).unwrap();
        assert_eq!(resolve(&fixture, &resolver, "ja"), "日本語");
        assert_eq!(resolver.disk_reads(), 1);
    }

    #[test]
    fn test_fallback_is_cached_too() {
        let fixture = LocaleFixture::new().with_empty_language("it");
        let resolver = NativeNameResolver::new();

        resolve(&fixture, &resolver, "it");
        resolve(&fixture, &resolver, "it");
        assert_eq!(resolver.disk_reads(), 1);

        resolver.clear_cache();
        resolve(&fixture, &resolver, "it");
        assert_eq!(resolver.disk_reads(), 2);
    }
}
