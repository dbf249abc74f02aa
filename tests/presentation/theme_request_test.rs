use studybot::application::ports::PreferenceStore;
use studybot::application::services::{THEME_KEY, THEME_SELECTED_KEY, ThemeSelector};
use studybot::domain::Theme;
use studybot::infrastructure::storage::{JsonFilePreferenceStore, MemoryPreferenceStore};
use studybot::presentation::cli::{ThemeRequest, apply_theme_request, theme_menu};

fn returning_user(theme: &str) -> ThemeSelector<MemoryPreferenceStore> {
    let store = MemoryPreferenceStore::with_values(&[(THEME_KEY, theme), (THEME_SELECTED_KEY, "true")]);
    ThemeSelector::load(store).unwrap()
}

#[test]
fn given_first_run_when_picking_then_only_previews_until_confirmed() {
    let mut selector = ThemeSelector::load(MemoryPreferenceStore::new()).unwrap();

    let preview = apply_theme_request(&mut selector, ThemeRequest::Pick("light".into())).unwrap();

    assert_eq!(preview, "Prévia: Tema Claro (claro)");
    assert_eq!(selector.applied(), Theme::Light);
    assert!(selector.store().get(THEME_KEY).unwrap().is_none());

    let saved = apply_theme_request(&mut selector, ThemeRequest::Confirm).unwrap();

    assert_eq!(saved, "Tema salvo: Tema Claro (claro)");
    assert_eq!(selector.store().get(THEME_KEY).unwrap().as_deref(), Some("light"));
    assert_eq!(selector.store().get(THEME_SELECTED_KEY).unwrap().as_deref(), Some("true"));
}

#[test]
fn given_first_run_when_dismissing_then_default_theme_is_kept_unsaved() {
    let mut selector = ThemeSelector::load(MemoryPreferenceStore::new()).unwrap();
    apply_theme_request(&mut selector, ThemeRequest::Pick("dark-black".into())).unwrap();

    let message = apply_theme_request(&mut selector, ThemeRequest::Dismiss).unwrap();

    assert_eq!(message, "Tema mantido: Dark Azul (escuro)");
    assert_eq!(selector.applied(), Theme::DarkBlue);
    assert!(!selector.prompt_visible());
    assert!(selector.store().get(THEME_SELECTED_KEY).unwrap().is_none());
}

#[test]
fn given_closed_picker_when_picking_then_theme_is_saved_at_once() {
    let mut selector = returning_user("dark-blue");

    let message = apply_theme_request(&mut selector, ThemeRequest::Pick("dark-black".into())).unwrap();

    assert_eq!(message, "Tema: Dark Preto (escuro)");
    assert_eq!(selector.store().get(THEME_KEY).unwrap().as_deref(), Some("dark-black"));
}

#[test]
fn given_closed_picker_when_confirming_then_nothing_changes() {
    let mut selector = returning_user("light");

    let message = apply_theme_request(&mut selector, ThemeRequest::Confirm).unwrap();

    assert!(message.contains("/themes"));
    assert_eq!(selector.active(), Theme::Light);
}

#[test]
fn given_unknown_name_when_picking_then_reports_it_without_change() {
    let mut selector = returning_user("light");

    let message = apply_theme_request(&mut selector, ThemeRequest::Pick("neon".into())).unwrap();

    assert!(message.contains("neon"));
    assert_eq!(selector.applied(), Theme::Light);
}

#[test]
fn given_saved_choice_when_reopening_picker_then_menu_marks_active_theme() {
    let mut selector = returning_user("dark-black");

    let menu = apply_theme_request(&mut selector, ThemeRequest::Open).unwrap();

    assert!(selector.prompt_visible());
    assert!(menu.contains("* dark-black"));
    assert!(menu.contains("  light       Tema Claro (claro)"));
}

#[test]
fn given_cycle_request_when_applying_then_next_theme_is_reported() {
    let mut selector = returning_user("light");

    let message = apply_theme_request(&mut selector, ThemeRequest::Cycle).unwrap();

    assert_eq!(message, "Tema: Dark Azul (escuro)");
}

#[test]
fn given_file_store_when_confirming_from_menu_then_choice_survives_reload() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");
    let mut selector = ThemeSelector::load(JsonFilePreferenceStore::new(&path)).unwrap();
    assert!(theme_menu(&selector).contains("* dark-blue"));

    apply_theme_request(&mut selector, ThemeRequest::Pick("light".into())).unwrap();
    apply_theme_request(&mut selector, ThemeRequest::Confirm).unwrap();

    let reloaded = ThemeSelector::load(JsonFilePreferenceStore::new(selector.store().path())).unwrap();
    assert_eq!(reloaded.active(), Theme::Light);
    assert!(!reloaded.prompt_visible());
}
