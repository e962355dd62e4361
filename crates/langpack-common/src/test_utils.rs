//! Test utilities and shared test helpers for the langpack workspace.
//!
//! This module provides logging setup and an on-disk locale fixture that
//! the other crates use in their unit and integration tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tempfile::TempDir;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// A throwaway directory laid out like an installed game:
///
/// ```text
/// <tmp>/locale/<code>/base.ini
/// <tmp>/locale/language_mapping.cfg
/// <tmp>/user/language.save
/// ```
pub struct LocaleFixture {
    dir: TempDir,
}

impl LocaleFixture {
    /// Create an empty fixture with an existing `locale/` root.
    pub fn new() -> Self {
        let dir = create_temp_dir();
        fs::create_dir_all(dir.path().join("locale")).expect("Failed to create locale root");
        Self { dir }
    }

    /// Create a fixture whose locale root does not exist.
    pub fn without_root() -> Self {
        Self { dir: create_temp_dir() }
    }

    /// The locale root directory.
    pub fn root(&self) -> PathBuf {
        self.dir.path().join("locale")
    }

    /// Where the language preference is persisted.
    pub fn preference_path(&self) -> PathBuf {
        self.dir.path().join("user").join("language.save")
    }

    /// The fixture's top-level temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Install a language folder with the given `base.ini` contents.
    #[must_use]
    pub fn with_language(self, code: &str, catalog: &str) -> Self {
        self.with_file(&format!("{code}/base.ini"), catalog.as_bytes())
    }

    /// Install a language folder without a catalog file.
    #[must_use]
    pub fn with_empty_language(self, code: &str) -> Self {
        fs::create_dir_all(self.root().join(code)).expect("Failed to create language folder");
        self
    }

    /// Write the `language_mapping.cfg` file.
    #[must_use]
    pub fn with_mapping(self, contents: &str) -> Self {
        self.with_file("language_mapping.cfg", contents.as_bytes())
    }

    /// Write an arbitrary file relative to the locale root.
    #[must_use]
    pub fn with_file(self, relative: &str, contents: &[u8]) -> Self {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        fs::write(&path, contents).expect("Failed to write fixture file");
        self
    }

    /// Pre-seed the persisted language preference.
    #[must_use]
    pub fn with_saved_language(self, code: &str) -> Self {
        let path = self.preference_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create preference directory");
        }
        fs::write(&path, format!("{code}\n")).expect("Failed to write preference file");
        self
    }

    /// Read back the persisted preference, if any.
    pub fn saved_language(&self) -> Option<String> {
        fs::read_to_string(self.preference_path())
            .ok()
            .and_then(|s| s.lines().next().map(str::to_string))
    }
}

impl Default for LocaleFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Catalog fixtures shared by the test suites.
pub mod catalog_fixtures {
    /// A small English catalog.
    pub fn english() -> &'static str {
        concat!(
            "# English\n",
            "[system]\n",
            "language_name = English\n",
            "\n",
            "[main_menu]\n",
            "continue = Continue\n",
            "new_game = New Game\n",
            "load_game = Load Game\n",
            "options = Options\n",
            "game_mode = Game Mode\n",
            "quit = Quit\n",
            "title = Title\n",
            "\n",
            "[settings]\n",
            "fullscreen = Fullscreen\n",
        )
    }

    /// A small Korean catalog.
    pub fn korean() -> &'static str {
        concat!(
            "[system]\n",
            "language_name = 한국어\n",
            "\n",
            "[main_menu]\n",
            "continue = 이어하기\n",
            "new_game=새게임\n",
            "load_game = 불러오기\n",
            "options = 옵션\n",
            "game_mode = 게임 모드\n",
            "quit = 종료\n",
            "title = 타이틀\n",
            "\n",
            "[settings]\n",
            "fullscreen = 전체 화면\n",
        )
    }
}
