//! System locale detection

use std::fmt::Debug;

/// Where the startup fallback gets the user's locale from.
pub trait LocaleSource: Debug {
    /// The raw locale string, e.g. `ko-KR` or `en_US.UTF-8`
    fn system_locale(&self) -> Option<String>;
}

/// The operating system locale, via `sys-locale`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLocale;

impl LocaleSource for SystemLocale {
    fn system_locale(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// A fixed answer, for tests and embedders that pick the locale themselves
#[derive(Debug, Default, Clone)]
pub struct FixedLocale(Option<String>);

impl FixedLocale {
    /// Always report `locale`
    pub fn new(locale: impl Into<String>) -> Self {
        Self(Some(locale.into()))
    }

    /// Report that no locale could be detected
    #[must_use]
    pub const fn none() -> Self {
        Self(None)
    }
}

impl LocaleSource for FixedLocale {
    fn system_locale(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Lower-cased primary language subtag: `ko-KR` -> `ko`, `pt_BR.UTF-8` -> `pt`.
#[must_use]
pub fn primary_language(locale: &str) -> Option<String> {
    let primary = locale
        .trim()
        .split(['-', '_', '.', '@'])
        .next()
        .unwrap_or_default()
        .to_lowercase();

    if primary.is_empty() || primary == "c" || primary == "posix" {
        None
    } else {
        Some(primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_language() {
        assert_eq!(primary_language("ko-KR").as_deref(), Some("ko"));
        assert_eq!(primary_language("pt_BR.UTF-8").as_deref(), Some("pt"));
        assert_eq!(primary_language("EN").as_deref(), Some("en"));
        assert_eq!(primary_language("de@euro").as_deref(), Some("de"));
        assert_eq!(primary_language(""), None);
        assert_eq!(primary_language("C.UTF-8"), None);
        assert_eq!(primary_language("POSIX"), None);
    }

    #[test]
    fn test_fixed_locale() {
        assert_eq!(FixedLocale::new("ja-JP").system_locale().as_deref(), Some("ja-JP"));
        assert_eq!(FixedLocale::none().system_locale(), None);
    }
}
