//! Internationalization manager

use crate::catalog::TranslationCatalog;
use crate::error::I18nError;
use crate::locale::{primary_language, LocaleSource, SystemLocale};
use crate::mapping::CountryMapping;
use crate::native_names::NativeNameResolver;
use crate::notifier::{ChangeNotifier, SubscriptionId};
use crate::preference::PreferenceStore;
use crate::registry::LanguageRegistry;
use langpack_common::LanguageCode;
use langpack_config::LocalizationSettings;
use std::cell::{Cell, OnceCell, RefCell};
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Whether a language switch is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchState {
    /// Nothing is loading
    Idle,
    /// A catalog is being loaded for a new language
    Loading,
}

/// What [`LocalizationManager::set_language`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The language is now active, persisted and announced
    Switched,
    /// The code is not installed; nothing changed
    Rejected,
}

#[derive(Debug)]
struct ActiveLanguage {
    code: LanguageCode,
    catalog: TranslationCatalog,
}

/// The localization service.
///
/// Construct one with [`LocalizationManager::new`], register listeners, then
/// call [`LocalizationManager::initialize`] once before asking for strings.
/// Until then the active language is the configured default and the catalog
/// is empty, so every lookup yields its `category.key` placeholder.
///
/// All operations take `&self` and run on the caller's thread. Listeners
/// receive `&LocalizationManager` and may call back into it, including
/// [`Self::set_language`] and [`Self::unsubscribe`].
#[derive(Debug)]
pub struct LocalizationManager {
    settings: LocalizationSettings,
    registry: LanguageRegistry,
    native_names: NativeNameResolver,
    preferences: PreferenceStore,
    countries: OnceCell<CountryMapping>,
    locale_source: Box<dyn LocaleSource>,
    active: RefCell<ActiveLanguage>,
    state: Cell<SwitchState>,
    notifier: ChangeNotifier<LocalizationManager>,
}

impl LocalizationManager {
    /// Create a manager that reads the operating system locale
    pub fn new(settings: LocalizationSettings) -> Self {
        Self::with_locale_source(settings, SystemLocale)
    }

    /// Create a manager with a custom system locale source
    pub fn with_locale_source(
        settings: LocalizationSettings,
        locale_source: impl LocaleSource + 'static,
    ) -> Self {
        Self {
            registry: LanguageRegistry::new(settings.locale_root.clone()),
            native_names: NativeNameResolver::new(),
            preferences: PreferenceStore::new(settings.preference_file.clone()),
            countries: OnceCell::new(),
            locale_source: Box::new(locale_source),
            active: RefCell::new(ActiveLanguage {
                code: settings.default_code(),
                catalog: TranslationCatalog::new(),
            }),
            state: Cell::new(SwitchState::Idle),
            notifier: ChangeNotifier::new(),
            settings,
        }
    }

    /// Startup: load the country mapping, pick the language (saved
    /// preference, else system locale, else default), load its catalog and
    /// notify listeners. Returns the chosen language.
    pub fn initialize(&self) -> LanguageCode {
        let mapping_path = self.settings.mapping_path();
        if self.countries.set(CountryMapping::load(&mapping_path)).is_err() {
            debug!("Country mapping already loaded, keeping it");
        }

        let code = self.startup_language();
        self.activate(code.clone());
        info!("LocalizationManager initialized. Language: {}", code);
        self.notifier.notify(self);
        code
    }

    fn startup_language(&self) -> LanguageCode {
        if let Some(saved) = self.preferences.load() {
            if self.registry.is_supported(saved.as_str()) {
                debug!("Using saved language {}", saved);
                return saved;
            }
            warn!("Saved language {} is not installed, ignoring it", saved);
        }

        if let Some(system) = self
            .locale_source
            .system_locale()
            .as_deref()
            .and_then(primary_language)
        {
            if self.registry.is_supported(&system) {
                debug!("Using system language {}", system);
                return LanguageCode::new(system);
            }
            debug!("System language {} is not installed", system);
        }

        self.settings.default_code()
    }

    fn load_catalog(&self, code: &LanguageCode) -> TranslationCatalog {
        let path = self.settings.catalog_path(code);
        match TranslationCatalog::load(&path) {
            Ok(catalog) => {
                info!("Translations loaded for {}", code);
                catalog
            }
            Err(e) => {
                e.report("Translation catalog unavailable, continuing without strings");
                TranslationCatalog::new()
            }
        }
    }

    /// Replace the active language and catalog as one step.
    fn activate(&self, code: LanguageCode) {
        self.state.set(SwitchState::Loading);
        let catalog = self.load_catalog(&code);
        *self.active.borrow_mut() = ActiveLanguage { code, catalog };
        self.state.set(SwitchState::Idle);
    }

    /// Installed languages, cached until [`Self::clear_cache`]
    pub fn detect_supported_languages(&self) -> Rc<[LanguageCode]> {
        self.registry.detect_supported_languages()
    }

    /// Whether `code` is installed
    pub fn is_supported(&self, code: &str) -> bool {
        self.registry.is_supported(code)
    }

    /// Translation for `category`/`key` in the active catalog, or the literal
    /// `"{category}.{key}"` when it is missing.
    pub fn get_string(&self, category: &str, key: &str) -> String {
        if let Some(value) = self.active.borrow().catalog.get(category, key) {
            return value.to_string();
        }

        warn!("Translation missing: [{}] {}", category, key);
        format!("{category}.{key}")
    }

    /// Translation lookup without the placeholder fallback
    pub fn lookup(&self, category: &str, key: &str) -> Option<String> {
        self.active
            .borrow()
            .catalog
            .get(category, key)
            .map(str::to_string)
    }

    /// Switch to `code`: reload its catalog, save the preference and notify
    /// every listener before returning. Codes that are not installed are
    /// logged and leave everything untouched.
    pub fn set_language(&self, code: &str) -> SwitchOutcome {
        if !self.registry.is_supported(code) {
            I18nError::UnsupportedLanguage {
                code: code.to_string(),
            }
            .report("Language switch rejected");
            return SwitchOutcome::Rejected;
        }

        let code = LanguageCode::new(code);
        self.activate(code.clone());
        self.preferences.save(&code);
        info!("Language changed to: {}", code);

        let notified = self.notifier.notify(self);
        debug!("Notified {} language listeners", notified);
        SwitchOutcome::Switched
    }

    /// The active language
    pub fn current_language(&self) -> LanguageCode {
        self.active.borrow().code.clone()
    }

    /// Whether a switch is currently loading
    pub fn switch_state(&self) -> SwitchState {
        self.state.get()
    }

    /// Number of entries in the active catalog
    pub fn catalog_len(&self) -> usize {
        self.active.borrow().catalog.len()
    }

    /// Register a language-change listener
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&Self) + 'static,
    {
        self.notifier.subscribe(listener)
    }

    /// Remove a language-change listener
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Number of registered listeners
    pub fn subscriber_count(&self) -> usize {
        self.notifier.len()
    }

    /// The language's name for itself, falling back to the upper-cased code
    pub fn native_language_name(&self, code: &str) -> String {
        let code = LanguageCode::new(code);
        let path = self.settings.catalog_path(&code);
        self.native_names.resolve(&code, &path)
    }

    /// Country code for `code`, or `code` itself when unmapped
    pub fn country_code(&self, code: &str) -> String {
        self.countries
            .get()
            .map_or_else(|| code.to_string(), |mapping| mapping.country_code(code))
    }

    /// Forget cached native names and the installed-language list, e.g.
    /// after new packs were copied into the locale root
    pub fn clear_cache(&self) {
        self.native_names.clear_cache();
        self.registry.clear_cache();
        info!("Localization cache cleared");
    }

    /// Catalog reads performed for native-name lookups
    pub fn native_name_reads(&self) -> usize {
        self.native_names.disk_reads()
    }

    /// The settings this manager was built with
    pub fn settings(&self) -> &LocalizationSettings {
        &self.settings
    }
}
