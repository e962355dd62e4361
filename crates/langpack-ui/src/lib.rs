//! # Langpack UI
//!
//! Widget-side half of langpack: a small typed widget tree, the applier that
//! writes catalog strings into it, per-language fonts and the title screen
//! that ties them to a [`langpack_i18n::LocalizationManager`].
//!
//! ```no_run
//! use langpack_config::LocalizationSettings;
//! use langpack_i18n::LocalizationManager;
//! use langpack_ui::{FontManager, TitleScreen};
//! use std::rc::Rc;
//!
//! let settings = LocalizationSettings::default();
//! let fonts = Rc::new(FontManager::from_settings(&settings));
//! let i18n = Rc::new(LocalizationManager::new(settings));
//! fonts.attach(&i18n);
//! i18n.initialize();
//!
//! let screen = TitleScreen::new(Rc::clone(&i18n), fonts);
//! screen.select_language_code("ko");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod element;
pub mod font;
pub mod guard;
pub mod title_screen;
pub mod translator;

pub use element::{
    Button, Element, Label, OptionItem, OptionList, TextDisplay, Toggle, Translatable, Widget,
};
pub use font::{FontError, FontFormat, FontManager, FontResource, Theme};
pub use guard::{ReentrancyFlag, ReentrancyGuard};
pub use title_screen::{MenuAction, SelectionOutcome, TitleScreen, LANGUAGE_OPTION_PATH};
pub use translator::{ApplyStats, StringSource, TranslationApplier};
