//! Wires configuration, localization and the title screen together.

use crate::cli::{Cli, Command};
use crate::error::{AppError, AppResult};
use langpack_common::init_logging;
use langpack_config::{AppConfig, ConfigLoader};
use langpack_i18n::{LocaleSource, LocalizationManager, SwitchOutcome, SystemLocale};
use langpack_ui::{FontManager, TitleScreen};
use std::io::Write;
use std::rc::Rc;
use tracing::{debug, info};

/// Running application.
pub struct App {
    config: AppConfig,
    i18n: Rc<LocalizationManager>,
    fonts: Rc<FontManager>,
}

impl App {
    /// Load the configuration named by `cli`, apply its overrides, set up
    /// logging and start.
    pub fn from_cli(cli: &Cli) -> AppResult<Self> {
        let mut config = ConfigLoader::load(cli.config.as_deref())?;
        cli.apply_overrides(&mut config);

        init_logging(&config.logging)?;
        info!("Starting langpack {}", env!("CARGO_PKG_VERSION"));

        Ok(Self::start(config))
    }

    /// Build the services and run the startup language resolution.
    pub fn start(config: AppConfig) -> Self {
        Self::with_locale_source(config, SystemLocale)
    }

    /// Like [`Self::start`] with a custom system locale source.
    pub fn with_locale_source(
        config: AppConfig,
        locale_source: impl LocaleSource + 'static,
    ) -> Self {
        let fonts = Rc::new(FontManager::from_settings(&config.localization));
        let i18n = Rc::new(LocalizationManager::with_locale_source(
            config.localization.clone(),
            locale_source,
        ));
        fonts.attach(&i18n);

        let language = i18n.initialize();
        info!("Application started with language {}", language);

        Self { config, i18n, fonts }
    }

    /// Execute one command, writing its output to `out`.
    pub fn run<W: Write>(&self, command: &Command, out: &mut W) -> AppResult<()> {
        debug!("Running command {:?}", command);
        match command {
            Command::List => self.list(out),
            Command::Current => {
                writeln!(out, "{}", self.i18n.current_language())?;
                Ok(())
            }
            Command::Get { category, key } => {
                writeln!(out, "{}", self.i18n.get_string(category, key))?;
                Ok(())
            }
            Command::Set { code } => self.set(code, out),
            Command::Render => self.render(out),
        }
    }

    fn list<W: Write>(&self, out: &mut W) -> AppResult<()> {
        for code in self.i18n.detect_supported_languages().iter() {
            writeln!(
                out,
                "{}\t{}\t{}",
                code,
                self.i18n.native_language_name(code.as_str()),
                self.i18n.country_code(code.as_str())
            )?;
        }
        Ok(())
    }

    fn set<W: Write>(&self, code: &str, out: &mut W) -> AppResult<()> {
        match self.i18n.set_language(code) {
            SwitchOutcome::Switched => {
                writeln!(out, "Language set to {code}")?;
                Ok(())
            }
            SwitchOutcome::Rejected => Err(AppError::UnsupportedLanguage(code.to_string())),
        }
    }

    fn render<W: Write>(&self, out: &mut W) -> AppResult<()> {
        let screen = TitleScreen::new(Rc::clone(&self.i18n), Rc::clone(&self.fonts));

        for (path, text) in screen.translated_texts() {
            writeln!(out, "{path}: {text}")?;
        }

        let selected = screen.selected_language();
        for item in screen.language_options() {
            let marker = if selected.as_ref() == Some(&item.value) { "*" } else { " " };
            writeln!(out, "[{marker}] {}", item.text)?;
        }
        Ok(())
    }

    /// The configuration the application runs with.
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The localization service.
    pub const fn i18n(&self) -> &Rc<LocalizationManager> {
        &self.i18n
    }
}
