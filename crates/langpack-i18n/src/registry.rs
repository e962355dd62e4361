//! Discovery of installed language packs

use langpack_common::LanguageCode;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{info, warn};

/// Lists the language folders under the locale root and remembers the answer.
///
/// The cached list is shared: every call until [`Self::clear_cache`] returns
/// the same allocation.
#[derive(Debug)]
pub struct LanguageRegistry {
    root: PathBuf,
    cache: RefCell<Option<Rc<[LanguageCode]>>>,
}

impl LanguageRegistry {
    /// Create a registry over `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: RefCell::new(None),
        }
    }

    /// The locale root this registry scans
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Installed languages, in directory enumeration order.
    ///
    /// Hidden entries (leading `.`) and plain files are skipped. An
    /// unreadable root yields an empty list and is not cached, so packs
    /// installed later are still found.
    pub fn detect_supported_languages(&self) -> Rc<[LanguageCode]> {
        if let Some(cached) = self.cache.borrow().as_ref() {
            return Rc::clone(cached);
        }

        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Cannot open locale root {:?}: {}", self.root, e);
                return Rc::from(Vec::new());
            }
        };

        let mut languages = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry in {:?}: {}", self.root, e);
                    continue;
                }
            };

            if !entry.path().is_dir() {
                continue;
            }

            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                warn!("Skipping non UTF-8 folder name {:?}", entry.file_name());
                continue;
            };

            if name.starts_with('.') {
                continue;
            }

            languages.push(LanguageCode::new(name));
        }

        let detected: Rc<[LanguageCode]> = Rc::from(languages);
        info!(
            "Detected supported languages: {}",
            detected
                .iter()
                .map(LanguageCode::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        );
        *self.cache.borrow_mut() = Some(Rc::clone(&detected));
        detected
    }

    /// Whether `code` is an installed language (literal comparison)
    pub fn is_supported(&self, code: &str) -> bool {
        self.detect_supported_languages()
            .iter()
            .any(|language| language == code)
    }

    /// Whether a detection result is currently cached
    pub fn is_cached(&self) -> bool {
        self.cache.borrow().is_some()
    }

    /// Forget the cached list
    pub fn clear_cache(&self) {
        self.cache.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use langpack_common::test_utils::LocaleFixture;

    fn sorted(codes: &[LanguageCode]) -> Vec<String> {
        let mut names: Vec<String> = codes.iter().map(ToString::to_string).collect();
        names.sort();
        names
    }

    #[test]
    fn test_detects_folders_only() {
        let fixture = LocaleFixture::new()
            .with_language("en", "[system]\n")
            .with_empty_language("ko")
            .with_empty_language(".git")
            .with_mapping("en = us\n");

        let registry = LanguageRegistry::new(fixture.root());
        assert_eq!(sorted(&registry.detect_supported_languages()), vec!["en", "ko"]);
    }

    #[test]
    fn test_cached_until_cleared() {
        let fixture = LocaleFixture::new().with_empty_language("en");
        let registry = LanguageRegistry::new(fixture.root());

        let first = registry.detect_supported_languages();
        let fixture = fixture.with_empty_language("de");
        let second = registry.detect_supported_languages();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 1);

        registry.clear_cache();
        assert!(!registry.is_cached());
        let third = registry.detect_supported_languages();
        assert_eq!(sorted(&third), vec!["de", "en"]);
        drop(fixture);
    }

    #[test]
    fn test_missing_root_is_empty_and_not_cached() {
        let fixture = LocaleFixture::without_root();
        let registry = LanguageRegistry::new(fixture.root());

        assert!(registry.detect_supported_languages().is_empty());
        assert!(!registry.is_cached());
    }

    #[test]
    fn test_is_supported_is_case_sensitive() {
        let fixture = LocaleFixture::new().with_empty_language("en");
        let registry = LanguageRegistry::new(fixture.root());

        assert!(registry.is_supported("en"));
        assert!(!registry.is_supported("EN"));
        assert!(!registry.is_supported("zz"));
    }
}
