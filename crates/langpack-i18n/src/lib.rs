//! Runtime language-pack support for langpack
//!
//! Language packs live on disk as one folder per language under a locale
//! root, each holding a `base.ini` catalog:
//!
//! ```text
//! locale/
//!   language_mapping.cfg     # en=us, ko=kr, ...
//!   en/base.ini
//!   ko/base.ini
//! ```
//!
//! This crate provides:
//!
//! - Catalog parsing for the sectioned `key = value` format
//! - Discovery of installed languages, with caching
//! - Native display names and country codes per language
//! - Persistence of the chosen language
//! - A synchronous change notification fired on every switch
//!
//! # Example
//!
//! ```no_run
//! use langpack_config::LocalizationSettings;
//! use langpack_i18n::LocalizationManager;
//!
//! let manager = LocalizationManager::new(LocalizationSettings::with_root("locale"));
//! manager.subscribe(|i18n| {
//!     println!("now speaking {}", i18n.current_language());
//! });
//! manager.initialize();
//!
//! println!("{}", manager.get_string("main_menu", "new_game"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod error;
pub mod locale;
pub mod manager;
pub mod mapping;
pub mod native_names;
pub mod notifier;
pub mod preference;
pub mod registry;

pub use catalog::{TranslationCatalog, DEFAULT_CATEGORY, LANGUAGE_NAME_KEY, SYSTEM_CATEGORY};
pub use error::{I18nError, I18nResult};
pub use locale::{primary_language, FixedLocale, LocaleSource, SystemLocale};
pub use manager::{LocalizationManager, SwitchOutcome, SwitchState};
pub use mapping::CountryMapping;
pub use native_names::NativeNameResolver;
pub use notifier::{ChangeNotifier, SubscriptionId};
pub use preference::PreferenceStore;
pub use registry::LanguageRegistry;

pub use langpack_common::LanguageCode;
