//! Writes catalog strings into widget trees

use crate::element::Element;
use langpack_i18n::LocalizationManager;
use tracing::{debug, trace};

/// Anything that resolves `category`/`key` to display text
pub trait StringSource {
    /// Resolved text; never fails
    fn get_string(&self, category: &str, key: &str) -> String;
}

impl StringSource for LocalizationManager {
    fn get_string(&self, category: &str, key: &str) -> String {
        Self::get_string(self, category, key)
    }
}

/// Counters from one [`TranslationApplier::apply`] pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyStats {
    /// Elements visited
    pub visited: usize,
    /// Elements whose text was rewritten
    pub translated: usize,
    /// Tagged elements with no text to rewrite
    pub skipped: usize,
}

/// Rewrites the text of tagged elements from a [`StringSource`]
#[derive(Debug)]
pub struct TranslationApplier<'a, S: ?Sized> {
    source: &'a S,
}

impl<'a, S: StringSource + ?Sized> TranslationApplier<'a, S> {
    /// Create an applier reading from `source`
    pub const fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Translate `root` and all of its descendants, parents before children.
    /// Untagged parents are still descended into.
    pub fn apply(&self, root: &mut Element) -> ApplyStats {
        let mut stats = ApplyStats::default();
        let mut pending = vec![root];

        while let Some(element) = pending.pop() {
            stats.visited += 1;
            match self.translate(element) {
                Some(true) => stats.translated += 1,
                Some(false) => stats.skipped += 1,
                None => {}
            }
            pending.extend(element.children_mut().iter_mut().rev());
        }

        debug!(
            visited = stats.visited,
            translated = stats.translated,
            skipped = stats.skipped,
            "Applied translations"
        );
        stats
    }

    /// Translate a single element, ignoring its children. Returns whether
    /// its text changed hands.
    pub fn apply_to(&self, element: &mut Element) -> bool {
        self.translate(element).unwrap_or(false)
    }

    /// `None` when untagged, `Some(false)` when tagged but textless
    fn translate(&self, element: &mut Element) -> Option<bool> {
        let tag = element.translation()?.clone();

        if element.widget().text_display().is_none() {
            trace!(
                "'{}' is a tagged {} with no text to translate",
                element.name(),
                element.widget().kind()
            );
            return Some(false);
        }

        let text = self.source.get_string(tag.category(), &tag.key);
        if let Some(display) = element.widget_mut().text_display_mut() {
            display.set_text(text);
        }
        Some(true)
    }
}
