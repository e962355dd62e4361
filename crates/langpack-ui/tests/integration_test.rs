//! Integration tests for langpack-ui

use langpack_common::test_utils::{catalog_fixtures, init_test_logging, LocaleFixture};
use langpack_config::LocalizationSettings;
use langpack_i18n::{FixedLocale, LanguageCode, LocalizationManager};
use langpack_ui::{FontFormat, FontManager, MenuAction, SelectionOutcome, TitleScreen};
use std::cell::Cell;
use std::fs;
use std::rc::Rc;

const TTF: &[u8] = &[0x00, 0x01, 0x00, 0x00, 0x00, 0x10];
const OTF: &[u8] = b"OTTO\x00\x10";

struct Harness {
    fixture: LocaleFixture,
    i18n: Rc<LocalizationManager>,
    fonts: Rc<FontManager>,
}

fn harness() -> Harness {
    init_test_logging();
    let fixture = LocaleFixture::new()
        .with_language("en", catalog_fixtures::english())
        .with_language("ko", catalog_fixtures::korean())
        .with_file("en/sans.otf", OTF)
        .with_file("ko/nanum.ttf", TTF)
        .with_mapping("en=us\nko=kr\n");

    let settings = LocalizationSettings::with_root(fixture.root())
        .preference_file(fixture.preference_path());
    let fonts = Rc::new(FontManager::from_settings(&settings));
    let i18n = Rc::new(LocalizationManager::with_locale_source(
        settings,
        FixedLocale::new("en-US"),
    ));
    fonts.attach(&i18n);
    i18n.initialize();

    Harness { fixture, i18n, fonts }
}

fn sorted_codes(screen: &TitleScreen) -> Vec<String> {
    let mut codes: Vec<String> = screen
        .language_options()
        .into_iter()
        .map(|item| item.value.to_string())
        .collect();
    codes.sort();
    codes
}

#[test]
fn test_screen_starts_translated() {
    let h = harness();
    let screen = TitleScreen::new(Rc::clone(&h.i18n), Rc::clone(&h.fonts));

    assert_eq!(
        screen.text_at(MenuAction::NewGame.button_path()).as_deref(),
        Some("New Game")
    );
    assert_eq!(
        screen.text_at("MarginContainer/Options_Box/Fullscreen").as_deref(),
        Some("Fullscreen")
    );
    assert_eq!(sorted_codes(&screen), vec!["en", "ko"]);
    assert_eq!(screen.selected_language(), Some(LanguageCode::new("en")));
    assert_eq!(
        h.fonts.current_font().map(|font| font.format()),
        Some(FontFormat::OpenType)
    );
}

#[test]
fn test_option_labels_use_native_names() {
    let h = harness();
    let screen = TitleScreen::new(Rc::clone(&h.i18n), Rc::clone(&h.fonts));

    let mut labels: Vec<String> = screen
        .language_options()
        .into_iter()
        .map(|item| item.text)
        .collect();
    labels.sort();
    assert_eq!(labels, vec!["English (EN)", "한국어 (KO)"]);
}

#[test]
fn test_selecting_language_refreshes_everything() {
    let h = harness();
    let screen = TitleScreen::new(Rc::clone(&h.i18n), Rc::clone(&h.fonts));

    assert_eq!(screen.select_language_code("ko"), SelectionOutcome::Switched);

    assert_eq!(h.i18n.current_language(), "ko");
    assert_eq!(
        screen.text_at(MenuAction::NewGame.button_path()).as_deref(),
        Some("새게임")
    );
    assert_eq!(
        screen.text_at(MenuAction::Quit.button_path()).as_deref(),
        Some("종료")
    );
    assert_eq!(screen.selected_language(), Some(LanguageCode::new("ko")));
    assert_eq!(
        h.fonts.current_font().map(|font| font.format()),
        Some(FontFormat::TrueType)
    );
    assert_eq!(h.fixture.saved_language().as_deref(), Some("ko"));
}

#[test]
fn test_removed_language_is_rejected_and_ui_kept() {
    let h = harness();
    let screen = TitleScreen::new(Rc::clone(&h.i18n), Rc::clone(&h.fonts));
    let before = screen.translated_texts();

    fs::remove_dir_all(h.fixture.root().join("ko")).unwrap();
    h.i18n.clear_cache();

    assert_eq!(screen.select_language_code("ko"), SelectionOutcome::Rejected);
    assert_eq!(h.i18n.current_language(), "en");
    assert_eq!(screen.translated_texts(), before);
    assert_eq!(screen.selected_language(), Some(LanguageCode::new("en")));
}

#[test]
fn test_out_of_range_selection() {
    let h = harness();
    let screen = TitleScreen::new(Rc::clone(&h.i18n), Rc::clone(&h.fonts));
    assert_eq!(screen.select_language(42), SelectionOutcome::NoSelection);
}

#[test]
fn test_nested_selection_is_blocked() {
    let h = harness();
    let screen = TitleScreen::new(Rc::clone(&h.i18n), Rc::clone(&h.fonts));

    let nested = Rc::new(Cell::new(None));
    let (slot, weak) = (Rc::clone(&nested), Rc::downgrade(&screen));
    h.i18n.subscribe(move |_| {
        if let Some(screen) = weak.upgrade() {
            slot.set(Some(screen.select_language(0)));
        }
    });

    assert_eq!(screen.select_language_code("ko"), SelectionOutcome::Switched);
    assert_eq!(nested.get(), Some(SelectionOutcome::Busy));

    // The guard is released again after the handler.
    assert_eq!(screen.select_language_code("en"), SelectionOutcome::Switched);
}

#[test]
fn test_dropping_screen_unsubscribes() {
    let h = harness();
    let baseline = h.i18n.subscriber_count();

    let screen = TitleScreen::new(Rc::clone(&h.i18n), Rc::clone(&h.fonts));
    assert_eq!(h.i18n.subscriber_count(), baseline + 1);

    drop(screen);
    assert_eq!(h.i18n.subscriber_count(), baseline);
    h.i18n.set_language("ko");
}

#[test]
fn test_menu_buttons_report_actions() {
    let h = harness();
    let screen = TitleScreen::new(Rc::clone(&h.i18n), Rc::clone(&h.fonts));

    assert_eq!(
        screen.press_button("MarginContainer/UI_Box/Button1"),
        Some(MenuAction::Continue)
    );
    assert_eq!(screen.press(MenuAction::Quit), MenuAction::Quit);
    assert_eq!(screen.press_button("MarginContainer/Title"), None);
}

#[test]
fn test_untranslated_keys_show_placeholder() {
    let h = harness();
    let fixture = h.fixture.with_language("fr", "[system]\nlanguage_name = Français\n");
    h.i18n.clear_cache();
    let screen = TitleScreen::new(Rc::clone(&h.i18n), Rc::clone(&h.fonts));

    assert_eq!(screen.select_language_code("fr"), SelectionOutcome::Switched);
    assert_eq!(
        screen.text_at(MenuAction::Options.button_path()).as_deref(),
        Some("main_menu.options")
    );
    // No font in the French pack: the English font stays.
    assert_eq!(
        h.fonts.current_font().map(|font| font.format()),
        Some(FontFormat::OpenType)
    );
    drop(fixture);
}
