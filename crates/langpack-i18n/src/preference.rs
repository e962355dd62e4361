//! Persistence of the chosen language

use crate::error::{I18nError, I18nResult};
use langpack_common::LanguageCode;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Stores a single language code on the first line of a text file.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Create a store backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The saved code, if any. An absent file or a blank first line is
    /// `Ok(None)`; other read faults are errors.
    pub fn try_load(&self) -> I18nResult<Option<LanguageCode>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(I18nError::from_io(&self.path, e)),
        };

        Ok(content
            .lines()
            .next()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(LanguageCode::new))
    }

    /// The saved code; any failure reads as "no preference".
    pub fn load(&self) -> Option<LanguageCode> {
        self.try_load().unwrap_or_else(|e| {
            e.report("Loading saved language");
            None
        })
    }

    /// Replace the saved code. The new content is written next to the file
    /// and renamed over it, so readers never see a half-written line.
    pub fn try_save(&self, code: &LanguageCode) -> I18nResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| I18nError::from_io(parent, e))?;
        }

        let staging = self.staging_path();
        fs::write(&staging, format!("{code}\n")).map_err(|e| I18nError::from_io(&staging, e))?;
        fs::rename(&staging, &self.path).map_err(|e| I18nError::from_io(&self.path, e))?;

        debug!("Saved language preference {} to {:?}", code, self.path);
        Ok(())
    }

    /// Replace the saved code; failures are logged and dropped.
    /// Returns whether the write went through.
    pub fn save(&self, code: &LanguageCode) -> bool {
        match self.try_save(code) {
            Ok(()) => true,
            Err(e) => {
                e.report("Saving language preference");
                false
            }
        }
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
