//! Per-language fonts
//!
//! Each language folder may ship `.ttf`/`.otf` files next to its catalog.
//! On every language change the first one (by file name) becomes the theme's
//! default font. Anything that goes wrong keeps the previous theme.

use langpack_common::LanguageCode;
use langpack_config::LocalizationSettings;
use langpack_i18n::{LocalizationManager, SubscriptionId};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

const FONT_EXTENSIONS: [&str; 2] = ["ttf", "otf"];

/// Why a font could not be installed
#[derive(Error, Debug)]
pub enum FontError {
    /// The language folder could not be listed
    #[error("Failed to open directory {}: {source}", dir.display())]
    Directory {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The folder holds no font file
    #[error("No font file found in {}", dir.display())]
    NoFontFile { dir: PathBuf },

    /// The font file could not be read
    #[error("Failed to read font {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file does not start with a known font signature
    #[error("Unrecognized font data in {}", path.display())]
    UnknownFormat { path: PathBuf },
}

/// Container format of a loaded font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFormat {
    /// TrueType outlines (`00 01 00 00` or `true`)
    TrueType,
    /// CFF outlines (`OTTO`)
    OpenType,
    /// Font collection (`ttcf`)
    Collection,
}

impl FontFormat {
    /// Identify the format from the first four bytes
    pub fn sniff(data: &[u8]) -> Option<Self> {
        match data.get(..4)? {
            [0x00, 0x01, 0x00, 0x00] | b"true" => Some(Self::TrueType),
            b"OTTO" => Some(Self::OpenType),
            b"ttcf" => Some(Self::Collection),
            _ => None,
        }
    }
}

/// A font file read into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontResource {
    path: PathBuf,
    format: FontFormat,
    data: Vec<u8>,
}

impl FontResource {
    /// Read and sniff a font file
    pub fn load(path: &Path) -> Result<Self, FontError> {
        let data = fs::read(path).map_err(|source| FontError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let format = FontFormat::sniff(&data).ok_or_else(|| FontError::UnknownFormat {
            path: path.to_path_buf(),
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            format,
            data,
        })
    }

    /// Where the font was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Detected container format
    pub const fn format(&self) -> FontFormat {
        self.format
    }

    /// Raw font bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Styling shared by every widget of the application
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    /// Font used when a widget sets none
    pub default_font: Option<Rc<FontResource>>,
}

/// Keeps the theme's default font in line with the active language
#[derive(Debug)]
pub struct FontManager {
    locale_root: PathBuf,
    theme: RefCell<Theme>,
}

impl FontManager {
    /// Manager looking for fonts under `locale_root/<code>/`
    pub fn new(locale_root: impl Into<PathBuf>) -> Self {
        Self {
            locale_root: locale_root.into(),
            theme: RefCell::new(Theme::default()),
        }
    }

    /// Manager using the configured locale root
    pub fn from_settings(settings: &LocalizationSettings) -> Self {
        Self::new(settings.locale_root())
    }

    /// Snapshot of the current theme
    pub fn theme(&self) -> Theme {
        self.theme.borrow().clone()
    }

    /// The installed default font, if any
    pub fn current_font(&self) -> Option<Rc<FontResource>> {
        self.theme.borrow().default_font.clone()
    }

    /// Install the font for `language`. Returns `false` and keeps the
    /// previous theme when no usable font is found.
    pub fn update_font(&self, language: &LanguageCode) -> bool {
        match self.try_update_font(language) {
            Ok(font) => {
                info!("Font applied: {}", font.path().display());
                true
            }
            Err(e @ FontError::NoFontFile { .. }) => {
                warn!("{}", e);
                false
            }
            Err(e) => {
                error!("{}", e);
                false
            }
        }
    }

    /// Fallible form of [`Self::update_font`]
    pub fn try_update_font(&self, language: &LanguageCode) -> Result<Rc<FontResource>, FontError> {
        let dir = self.locale_root.join(language.as_str());
        let path = Self::find_font_file(&dir)?;
        let font = Rc::new(FontResource::load(&path)?);
        debug!("Loaded font: {} ({:?})", path.display(), font.format());

        self.theme.borrow_mut().default_font = Some(Rc::clone(&font));
        Ok(font)
    }

    /// First `.ttf`/`.otf` file in `dir`, by file name
    pub fn find_font_file(dir: &Path) -> Result<PathBuf, FontError> {
        let entries = fs::read_dir(dir).map_err(|source| FontError::Directory {
            dir: dir.to_path_buf(),
            source,
        })?;

        let mut fonts: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .filter(|path| path.is_file() && is_font_file(path))
            .collect();
        fonts.sort();

        fonts.into_iter().next().ok_or_else(|| FontError::NoFontFile {
            dir: dir.to_path_buf(),
        })
    }

    /// Follow language changes from `i18n`. The subscription holds only a
    /// weak reference; it goes quiet once the manager is dropped.
    pub fn attach(self: &Rc<Self>, i18n: &LocalizationManager) -> SubscriptionId {
        let fonts = Rc::downgrade(self);
        i18n.subscribe(move |manager| {
            if let Some(fonts) = fonts.upgrade() {
                let language = manager.current_language();
                info!("Language changed to {}, updating font...", language);
                fonts.update_font(&language);
            }
        })
    }
}

fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            FONT_EXTENSIONS
                .iter()
                .any(|font_ext| ext.eq_ignore_ascii_case(font_ext))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use langpack_common::test_utils::LocaleFixture;

    const TTF: &[u8] = &[0x00, 0x01, 0x00, 0x00, 0x00, 0x0a];
    const OTF: &[u8] = b"OTTO\x00\x0a";

    #[test]
    fn test_sniff() {
        assert_eq!(FontFormat::sniff(TTF), Some(FontFormat::TrueType));
        assert_eq!(FontFormat::sniff(b"true...."), Some(FontFormat::TrueType));
        assert_eq!(FontFormat::sniff(OTF), Some(FontFormat::OpenType));
        assert_eq!(FontFormat::sniff(b"ttcf"), Some(FontFormat::Collection));
        assert_eq!(FontFormat::sniff(b"wOFF"), None);
        assert_eq!(FontFormat::sniff(b"OT"), None);
    }

    #[test]
    fn test_first_font_by_name() {
        let fixture = LocaleFixture::new()
            .with_file("ko/b.otf", OTF)
            .with_file("ko/a.TTF", TTF)
            .with_file("ko/readme.txt", b"x")
            .with_file("ko/base.ini", b"[system]\n");

        let found = FontManager::find_font_file(&fixture.root().join("ko")).unwrap();
        assert_eq!(found.file_name().and_then(|n| n.to_str()), Some("a.TTF"));
    }

    #[test]
    fn test_update_installs_font() {
        let fixture = LocaleFixture::new().with_file("ko/nanum.ttf", TTF);
        let fonts = FontManager::new(fixture.root());

        assert!(fonts.update_font(&LanguageCode::new("ko")));
        let font = fonts.current_font().unwrap();
        assert_eq!(font.format(), FontFormat::TrueType);
        assert_eq!(font.data(), TTF);
    }

    #[test]
    fn test_failures_keep_previous_theme() {
        let fixture = LocaleFixture::new()
            .with_file("en/sans.otf", OTF)
            .with_file("ja/broken.ttf", b"nope")
            .with_empty_language("fr");
        let fonts = FontManager::new(fixture.root());
        assert!(fonts.update_font(&LanguageCode::new("en")));
        let before = fonts.theme();

        assert!(!fonts.update_font(&LanguageCode::new("fr")));
        assert!(!fonts.update_font(&LanguageCode::new("ja")));
        assert!(!fonts.update_font(&LanguageCode::new("zz")));
        assert_eq!(fonts.theme(), before);
    }

    #[test]
    fn test_error_kinds() {
        let fixture = LocaleFixture::new()
            .with_file("ja/broken.ttf", b"nope")
            .with_empty_language("fr");
        let fonts = FontManager::new(fixture.root());

        assert!(matches!(
            fonts.try_update_font(&LanguageCode::new("zz")),
            Err(FontError::Directory { .. })
        ));
        assert!(matches!(
            fonts.try_update_font(&LanguageCode::new("fr")),
            Err(FontError::NoFontFile { .. })
        ));
        assert!(matches!(
            fonts.try_update_font(&LanguageCode::new("ja")),
            Err(FontError::UnknownFormat { .. })
        ));
    }
}
