//! Title screen: language picker and main menu

use crate::element::{Button, Element, Label, OptionItem, OptionList, Toggle, Translatable, Widget};
use crate::font::FontManager;
use crate::guard::ReentrancyFlag;
use crate::translator::{ApplyStats, TranslationApplier};
use langpack_common::LanguageCode;
use langpack_i18n::{LocalizationManager, SubscriptionId, SwitchOutcome};
use std::cell::{Cell, Ref, RefCell};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Path of the language drop-down inside the screen
pub const LANGUAGE_OPTION_PATH: &str = "MarginContainer/Locale_Box/LangOption";

/// The six main menu buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Resume the last saved game
    Continue,
    /// Start a new game
    NewGame,
    /// Pick a saved game
    LoadGame,
    /// Game options
    Options,
    /// Choose a game mode
    GameMode,
    /// Leave the game
    Quit,
}

impl MenuAction {
    /// All actions, in button order
    pub const ALL: [Self; 6] = [
        Self::Continue,
        Self::NewGame,
        Self::LoadGame,
        Self::Options,
        Self::GameMode,
        Self::Quit,
    ];

    /// Path of the action's button inside the screen
    pub const fn button_path(self) -> &'static str {
        match self {
            Self::Continue => "MarginContainer/UI_Box/Button1",
            Self::NewGame => "MarginContainer/UI_Box/Button2",
            Self::LoadGame => "MarginContainer/UI_Box/Button3",
            Self::Options => "MarginContainer/UI_Box/Button4",
            Self::GameMode => "MarginContainer/UI_Box/Button5",
            Self::Quit => "MarginContainer/UI_Box/Button6",
        }
    }

    /// Catalog key of the button label
    pub const fn translation_key(self) -> &'static str {
        match self {
            Self::Continue => "continue",
            Self::NewGame => "new_game",
            Self::LoadGame => "load_game",
            Self::Options => "options",
            Self::GameMode => "game_mode",
            Self::Quit => "quit",
        }
    }

    /// The action whose button sits at `path`
    pub fn from_button_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.button_path() == path)
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Continue => "load last saved game",
            Self::NewGame => "new game",
            Self::LoadGame => "load saved game",
            Self::Options => "game options",
            Self::GameMode => "game mode selection",
            Self::Quit => "quit game",
        };
        f.write_str(text)
    }
}

/// Result of picking an entry in the language drop-down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The language changed and the screen was refreshed
    Switched,
    /// The language is no longer installed; nothing changed
    Rejected,
    /// A selection was already being handled
    Busy,
    /// No entry exists at that index
    NoSelection,
}

/// The first screen of the game.
///
/// Built with [`TitleScreen::new`], which returns an `Rc` because the screen
/// registers itself (weakly) for language changes. Dropping the last `Rc`
/// unsubscribes.
pub struct TitleScreen {
    i18n: Rc<LocalizationManager>,
    fonts: Rc<FontManager>,
    tree: RefCell<Element>,
    selecting: ReentrancyFlag,
    subscription: Cell<Option<SubscriptionId>>,
}

impl TitleScreen {
    /// Build the screen: set the font, fill the language list, translate
    /// every label and start following language changes.
    pub fn new(i18n: Rc<LocalizationManager>, fonts: Rc<FontManager>) -> Rc<Self> {
        fonts.update_font(&i18n.current_language());

        let screen = Rc::new(Self {
            i18n,
            fonts,
            tree: RefCell::new(build_tree()),
            selecting: ReentrancyFlag::new(),
            subscription: Cell::new(None),
        });
        screen.refresh();

        let weak = Rc::downgrade(&screen);
        let id = screen.i18n.subscribe(move |_| {
            if let Some(screen) = weak.upgrade() {
                screen.on_language_changed();
            }
        });
        screen.subscription.set(Some(id));

        screen
    }

    fn on_language_changed(&self) {
        debug!("Language changed event received");
        self.refresh();
    }

    /// Rebuild the language list and re-apply every translation
    pub fn refresh(&self) -> ApplyStats {
        self.rebuild_language_options();
        TranslationApplier::new(&*self.i18n).apply(&mut self.tree.borrow_mut())
    }

    fn rebuild_language_options(&self) {
        let current = self.i18n.current_language();
        let items: Vec<OptionItem> = self
            .i18n
            .detect_supported_languages()
            .iter()
            .map(|code| {
                let native = self.i18n.native_language_name(code.as_str());
                OptionItem::new(format!("{native} ({})", code.to_uppercase()), code.clone())
            })
            .collect();

        let mut tree = self.tree.borrow_mut();
        let Some(Widget::OptionList(list)) =
            tree.find_mut(LANGUAGE_OPTION_PATH).map(Element::widget_mut)
        else {
            warn!("Language option list missing at {}", LANGUAGE_OPTION_PATH);
            return;
        };

        list.clear();
        for item in items {
            let is_current = item.value == current;
            let index = list.push(item);
            if is_current {
                list.select(index);
            }
        }
    }

    /// Handle the user picking entry `index` of the language list.
    pub fn select_language(&self, index: usize) -> SelectionOutcome {
        let Some(_guard) = self.selecting.try_enter() else {
            debug!("Ignoring language selection {} while another is handled", index);
            return SelectionOutcome::Busy;
        };

        info!("Language selected: index={}", index);

        let code = {
            let tree = self.tree.borrow();
            option_list(&tree)
                .and_then(|list| list.item(index))
                .map(|item| item.value.clone())
        };

        let Some(code) = code.filter(|code| !code.is_empty()) else {
            warn!("No language at option index {}", index);
            return SelectionOutcome::NoSelection;
        };

        debug!("Setting language to: {}", code);
        match self.i18n.set_language(code.as_str()) {
            SwitchOutcome::Switched => SelectionOutcome::Switched,
            SwitchOutcome::Rejected => SelectionOutcome::Rejected,
        }
    }

    /// Select the entry for `code`, if listed
    pub fn select_language_code(&self, code: &str) -> SelectionOutcome {
        let index = self
            .language_options()
            .iter()
            .position(|item| item.value == code);
        index.map_or(SelectionOutcome::NoSelection, |index| self.select_language(index))
    }

    /// Run a menu action
    pub fn press(&self, action: MenuAction) -> MenuAction {
        info!("Menu: {}", action);
        action
    }

    /// Run the action of the button at `path`
    pub fn press_button(&self, path: &str) -> Option<MenuAction> {
        MenuAction::from_button_path(path).map(|action| self.press(action))
    }

    /// The widget tree
    pub fn tree(&self) -> Ref<'_, Element> {
        self.tree.borrow()
    }

    /// Text of the element at `path`
    pub fn text_at(&self, path: &str) -> Option<String> {
        self.tree.borrow().find(path).and_then(Element::text).map(str::to_string)
    }

    /// Entries of the language list
    pub fn language_options(&self) -> Vec<OptionItem> {
        option_list(&self.tree.borrow()).map_or_else(Vec::new, |list| list.items().to_vec())
    }

    /// Language of the selected list entry
    pub fn selected_language(&self) -> Option<LanguageCode> {
        option_list(&self.tree.borrow())
            .and_then(OptionList::selected_item)
            .map(|item| item.value.clone())
    }

    /// Path and text of every translated element, in tree order
    pub fn translated_texts(&self) -> Vec<(String, String)> {
        let mut texts = Vec::new();
        self.tree.borrow().walk(|path, element| {
            if let (Some(_), Some(text)) = (element.translation(), element.text()) {
                texts.push((path.to_string(), text.to_string()));
            }
        });
        texts
    }

    /// Font manager shared with the rest of the UI
    pub fn fonts(&self) -> &Rc<FontManager> {
        &self.fonts
    }
}

impl fmt::Debug for TitleScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TitleScreen")
            .field("language", &self.i18n.current_language())
            .field("subscription", &self.subscription.get())
            .field("selecting", &self.selecting.is_active())
            .finish_non_exhaustive()
    }
}

impl Drop for TitleScreen {
    fn drop(&mut self) {
        debug!("TitleScreen exiting");
        if let Some(id) = self.subscription.take() {
            self.i18n.unsubscribe(id);
        }
    }
}

fn option_list(tree: &Element) -> Option<&OptionList> {
    match tree.find(LANGUAGE_OPTION_PATH).map(Element::widget) {
        Some(Widget::OptionList(list)) => Some(list),
        _ => None,
    }
}

fn build_tree() -> Element {
    let buttons = MenuAction::ALL.into_iter().fold(Element::container("UI_Box"), |ui_box, action| {
        let name = action.button_path().rsplit('/').next().unwrap_or_default();
        ui_box.child(
            Element::new(name, Widget::Button(Button::default()))
                .translatable(Translatable::new(action.translation_key())),
        )
    });

    Element::container("TitleScreen").child(
        Element::container("MarginContainer")
            .child(
                Element::new("Title", Widget::Label(Label::default()))
                    .translatable(Translatable::new("title")),
            )
            .child(
                Element::container("Locale_Box")
                    .child(Element::new("LangOption", Widget::OptionList(OptionList::default()))),
            )
            .child(buttons)
            .child(
                Element::container("Options_Box").child(
                    Element::new("Fullscreen", Widget::Toggle(Toggle::default()))
                        .translatable(Translatable::in_category("settings", "fullscreen")),
                ),
            ),
    )
}
