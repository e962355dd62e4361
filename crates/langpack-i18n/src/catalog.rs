//! Translation catalogs and the line format they are stored in
//!
//! A catalog file is read line by line, each line trimmed first:
//!
//! ```text
//! # comment
//! [main_menu]
//! new_game = New Game
//! quit=Quit
//! ```
//!
//! - blank lines and lines starting with `#` are ignored
//! - `[name]` opens `name` as the current category, keeping what it already has
//! - `key = value` inside a category is split at the first `=`, both sides
//!   trimmed; a later line for the same key replaces the earlier value
//! - `key = value` before any category is ignored
//! - anything else is skipped without aborting the parse
//!
//! There is no escaping and no multi-line value.

use crate::error::{I18nError, I18nResult};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::ControlFlow;
use std::path::Path;
use tracing::{debug, trace};

/// Category used when a translatable element does not name one
pub const DEFAULT_CATEGORY: &str = "main_menu";

/// Category holding per-language metadata
pub const SYSTEM_CATEGORY: &str = "system";

/// Key in [`SYSTEM_CATEGORY`] holding the language's own name for itself
pub const LANGUAGE_NAME_KEY: &str = "language_name";

/// One classified, trimmed line of a catalog or mapping file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    /// Blank or comment
    Skip,
    /// `[name]`
    Section(&'a str),
    /// `key = value`, both trimmed, key never empty
    Entry { key: &'a str, value: &'a str },
    /// Anything else
    Malformed,
}

pub(crate) fn classify(raw: &str) -> Line<'_> {
    let line = raw.trim();

    if line.is_empty() || line.starts_with('#') {
        return Line::Skip;
    }

    if line.len() >= 2 && line.starts_with('[') && line.ends_with(']') {
        return Line::Section(&line[1..line.len() - 1]);
    }

    match line.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Line::Entry {
            key: key.trim(),
            value: value.trim(),
        },
        _ => Line::Malformed,
    }
}

/// Stream the lines of `path` to `visit`, stopping early on
/// [`ControlFlow::Break`]. Invalid UTF-8 is replaced rather than rejected.
pub(crate) fn scan_lines<F>(path: &Path, mut visit: F) -> I18nResult<()>
where
    F: FnMut(usize, &str) -> ControlFlow<()>,
{
    let file = File::open(path).map_err(|e| I18nError::from_io(path, e))?;
    let reader = BufReader::new(file);

    for (index, chunk) in reader.split(b'\n').enumerate() {
        let bytes = chunk.map_err(|e| I18nError::from_io(path, e))?;
        let line = String::from_utf8_lossy(&bytes);
        if visit(index + 1, &line).is_break() {
            break;
        }
    }

    Ok(())
}

/// A language's strings, grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationCatalog {
    categories: HashMap<String, HashMap<String, String>>,
}

impl TranslationCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse catalog text. Never fails; bad lines are skipped.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut builder = CatalogBuilder::default();
        for (index, line) in text.lines().enumerate() {
            builder.feed(index + 1, line);
        }
        builder.finish()
    }

    /// Read and parse a catalog file.
    ///
    /// A missing file is reported as [`I18nError::MissingResource`]; callers
    /// that want the documented "empty catalog" behaviour use
    /// `unwrap_or_default()` after logging.
    pub fn load(path: &Path) -> I18nResult<Self> {
        debug!("Loading catalog file: {:?}", path);

        let mut builder = CatalogBuilder::default();
        scan_lines(path, |number, line| {
            builder.feed(number, line);
            ControlFlow::Continue(())
        })?;
        Ok(builder.finish())
    }

    /// Look up a translation
    #[must_use]
    pub fn get(&self, category: &str, key: &str) -> Option<&str> {
        self.categories
            .get(category)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    /// Insert or replace a translation, creating the category if needed
    pub fn insert(
        &mut self,
        category: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.categories
            .entry(category.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// All entries of one category
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&HashMap<String, String>> {
        self.categories.get(name)
    }

    /// Whether the category exists, even if it is empty
    #[must_use]
    pub fn has_category(&self, name: &str) -> bool {
        self.categories.contains_key(name)
    }

    /// Category names, in no particular order
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Total number of entries across all categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.values().map(HashMap::len).sum()
    }

    /// Whether the catalog holds no categories at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[derive(Default)]
struct CatalogBuilder {
    catalog: TranslationCatalog,
    current: Option<String>,
    skipped: usize,
}

impl CatalogBuilder {
    fn feed(&mut self, number: usize, raw: &str) {
        match classify(raw) {
            Line::Skip => {}
            // `[]` names nothing; entries after it are dropped until the
            // next real section.
            Line::Section("") => self.current = None,
            Line::Section(name) => {
                self.catalog.categories.entry(name.to_string()).or_default();
                self.current = Some(name.to_string());
            }
            Line::Entry { key, value } => match &self.current {
                Some(category) => self.catalog.insert(category.as_str(), key, value),
                None => {
                    trace!("Ignoring entry '{}' on line {} outside any section", key, number);
                }
            },
            Line::Malformed => {
                self.skipped += 1;
                I18nError::MalformedLine {
                    line: number,
                    content: raw.trim().to_string(),
                }
                .report("Skipping catalog line");
            }
        }
    }

    fn finish(self) -> TranslationCatalog {
        debug!(
            categories = self.catalog.categories.len(),
            entries = self.catalog.len(),
            skipped = self.skipped,
            "Parsed catalog"
        );
        self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify("   "), Line::Skip);
        assert_eq!(classify("# note = here"), Line::Skip);
        assert_eq!(classify(" [main_menu] "), Line::Section("main_menu"));
        assert_eq!(
            classify(" a = b = c "),
            Line::Entry { key: "a", value: "b = c" }
        );
        assert_eq!(classify("keyonly"), Line::Malformed);
        assert_eq!(classify("= value"), Line::Malformed);
        assert_eq!(classify("[unclosed"), Line::Malformed);
    }

    #[test]
    fn test_parse_scenario() {
        let catalog = TranslationCatalog::parse("[main_menu]\nnew_game=새게임\n");
        assert_eq!(catalog.get("main_menu", "new_game"), Some("새게임"));
    }

    #[test]
    fn test_entries_outside_section_ignored() {
        let catalog = TranslationCatalog::parse("orphan = value\n[ui]\nok = yes\n");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("ui", "ok"), Some("yes"));
        assert_eq!(catalog.get("", "orphan"), None);
    }

    #[test]
    fn test_keyonly_line_leaves_catalog_unchanged() {
        let with_bad = TranslationCatalog::parse("[ui]\na = 1\nkeyonly\nb = 2\n");
        let without = TranslationCatalog::parse("[ui]\na = 1\nb = 2\n");
        assert_eq!(with_bad, without);
    }

    #[test]
    fn test_last_occurrence_wins() {
        let catalog = TranslationCatalog::parse("[ui]\nk = first\nk = second\n");
        assert_eq!(catalog.get("ui", "k"), Some("second"));
    }

    #[test]
    fn test_reopened_section_keeps_entries() {
        let catalog = TranslationCatalog::parse("[a]\nx = 1\n[b]\ny = 2\n[a]\nz = 3\n");
        assert_eq!(catalog.get("a", "x"), Some("1"));
        assert_eq!(catalog.get("a", "z"), Some("3"));
        assert_eq!(catalog.get("b", "y"), Some("2"));
    }

    #[test]
    fn test_empty_section_creates_category() {
        let catalog = TranslationCatalog::parse("[empty]\n");
        assert!(catalog.has_category("empty"));
        assert_eq!(catalog.len(), 0);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_blank_section_name_closes_section() {
        let catalog = TranslationCatalog::parse("[a]\nx = 1\n[]\ny = 2\n");
        assert_eq!(catalog.get("a", "x"), Some("1"));
        assert_eq!(catalog.get("a", "y"), None);
        assert!(!catalog.has_category(""));
    }

    #[test]
    fn test_crlf_and_whitespace() {
        let catalog = TranslationCatalog::parse("[ui]\r\n  title =  Hello World  \r\n");
        assert_eq!(catalog.get("ui", "title"), Some("Hello World"));
    }

    #[test]
    fn test_empty_value_is_kept() {
        let catalog = TranslationCatalog::parse("[ui]\nblank =\n");
        assert_eq!(catalog.get("ui", "blank"), Some(""));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = TranslationCatalog::load(&dir.path().join("base.ini")).unwrap_err();
        assert!(err.is_missing());
    }

    #[test]
    fn test_load_tolerates_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("base.ini");
        std::fs::write(&path, b"[ui]\nbad = \xff\xfe\nok = fine\n").unwrap();

        let catalog = TranslationCatalog::load(&path).unwrap();
        assert_eq!(catalog.get("ui", "ok"), Some("fine"));
        assert!(catalog.get("ui", "bad").is_some());
    }

    #[test]
    fn test_scan_lines_stops_on_break() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f.ini");
        std::fs::write(&path, "a\nb\nc\n").unwrap();

        let mut seen = Vec::new();
        scan_lines(&path, |number, line| {
            seen.push((number, line.to_string()));
            if line == "b" {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .unwrap();

        assert_eq!(seen, vec![(1, "a".to_string()), (2, "b".to_string())]);
    }

    proptest! {
        #[test]
        fn test_parse_never_panics(text in "(?s).{0,400}") {
            let _ = TranslationCatalog::parse(&text);
        }

        #[test]
        fn test_last_value_wins_for_any_key(
            key in "[a-z_]{1,12}",
            values in prop::collection::vec("[A-Za-z0-9 ]{0,16}", 1..6),
        ) {
            let mut text = String::from("[cat]\n");
            for value in &values {
                text.push_str(&format!("{key} = {value}\n"));
            }
            let catalog = TranslationCatalog::parse(&text);
            let expected = values.last().map(|v| v.trim()).unwrap_or_default();
            prop_assert_eq!(catalog.get("cat", &key), Some(expected));
        }
    }
}
