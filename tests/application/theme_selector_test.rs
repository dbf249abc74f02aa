use studybot::application::ports::PreferenceStore;
use studybot::application::services::{THEME_KEY, THEME_SELECTED_KEY, ThemeSelector};
use studybot::domain::Theme;
use studybot::infrastructure::storage::MemoryPreferenceStore;

#[test]
fn given_first_visit_when_loading_then_prompt_is_shown_with_default_theme() {
    let selector = ThemeSelector::load(MemoryPreferenceStore::new()).unwrap();

    assert!(selector.prompt_visible());
    assert_eq!(selector.active(), Theme::DarkBlue);
}

#[test]
fn given_saved_choice_when_loading_then_theme_is_restored_without_prompt() {
    let store = MemoryPreferenceStore::with_values(&[
        (THEME_KEY, "light"),
        (THEME_SELECTED_KEY, "true"),
    ]);

    let selector = ThemeSelector::load(store).unwrap();

    assert!(!selector.prompt_visible());
    assert_eq!(selector.applied(), Theme::Light);
}

#[test]
fn given_corrupt_saved_theme_when_loading_then_falls_back_to_default() {
    let store = MemoryPreferenceStore::with_values(&[
        (THEME_KEY, "neon"),
        (THEME_SELECTED_KEY, "true"),
    ]);

    let selector = ThemeSelector::load(store).unwrap();

    assert_eq!(selector.active(), Theme::DarkBlue);
}

#[test]
fn given_preview_when_confirming_then_both_keys_are_persisted() {
    let mut selector = ThemeSelector::load(MemoryPreferenceStore::new()).unwrap();

    selector.preview(Theme::DarkBlack);
    assert_eq!(selector.applied(), Theme::DarkBlack);
    let confirmed = selector.confirm().unwrap();

    assert_eq!(confirmed, Theme::DarkBlack);
    assert!(!selector.prompt_visible());
    let store = selector.store();
    assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark-black"));
    assert_eq!(store.get(THEME_SELECTED_KEY).unwrap().as_deref(), Some("true"));
}

#[test]
fn given_preview_when_dismissing_then_active_theme_is_kept_and_nothing_saved() {
    let mut selector = ThemeSelector::load(MemoryPreferenceStore::new()).unwrap();

    selector.preview(Theme::Light);
    selector.dismiss();

    assert_eq!(selector.applied(), Theme::DarkBlue);
    assert!(!selector.prompt_visible());
    assert!(selector.store().get(THEME_KEY).unwrap().is_none());
    assert!(selector.store().get(THEME_SELECTED_KEY).unwrap().is_none());
}

#[test]
fn given_active_theme_when_cycling_then_next_theme_is_saved() {
    let store = MemoryPreferenceStore::with_values(&[
        (THEME_KEY, "dark-black"),
        (THEME_SELECTED_KEY, "true"),
    ]);
    let mut selector = ThemeSelector::load(store).unwrap();

    let theme = selector.cycle().unwrap();

    assert_eq!(theme, Theme::Light);
    assert_eq!(selector.store().get(THEME_KEY).unwrap().as_deref(), Some("light"));
}

#[test]
fn given_confirmed_theme_when_reopening_prompt_then_preview_starts_from_active() {
    let store = MemoryPreferenceStore::with_values(&[
        (THEME_KEY, "light"),
        (THEME_SELECTED_KEY, "true"),
    ]);
    let mut selector = ThemeSelector::load(store).unwrap();

    selector.open_prompt();

    assert!(selector.prompt_visible());
    assert_eq!(selector.preview_theme(), Theme::Light);
}
