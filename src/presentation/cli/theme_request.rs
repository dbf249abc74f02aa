use crate::application::ports::{PreferenceStore, PreferenceStoreError};
use crate::application::services::ThemeSelector;
use crate::domain::Theme;

/// Theme actions reachable from the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeRequest {
    /// Show the picker again, previewing from the active theme.
    Open,
    Cycle,
    Pick(String),
    Confirm,
    Dismiss,
}

fn label(theme: Theme) -> String {
    let tone = if theme.is_dark() { "escuro" } else { "claro" };
    format!("{} ({})", theme.display_name(), tone)
}

/// Theme list with the applied one marked.
pub fn theme_menu<S: PreferenceStore>(selector: &ThemeSelector<S>) -> String {
    let mut menu = String::from("Escolha seu tema com /theme <nome>, depois /theme ok ou /theme cancel:");
    for theme in Theme::ALL {
        let marker = if theme == selector.applied() { '*' } else { ' ' };
        menu.push_str(&format!("\n {} {:<11} {}", marker, theme.as_str(), label(theme)));
    }
    menu
}

/// Applies `request` and returns the line to show the user. While the picker
/// is open a named theme is only previewed; otherwise it is saved at once.
pub fn apply_theme_request<S: PreferenceStore>(
    selector: &mut ThemeSelector<S>,
    request: ThemeRequest,
) -> Result<String, PreferenceStoreError> {
    let message = match request {
        ThemeRequest::Open => {
            selector.open_prompt();
            theme_menu(selector)
        }
        ThemeRequest::Cycle => format!("Tema: {}", label(selector.cycle()?)),
        ThemeRequest::Pick(name) => match name.parse::<Theme>() {
            Err(e) => e,
            Ok(theme) if selector.prompt_visible() => {
                selector.preview(theme);
                format!("Prévia: {}", label(theme))
            }
            Ok(theme) => {
                selector.preview(theme);
                format!("Tema: {}", label(selector.confirm()?))
            }
        },
        ThemeRequest::Confirm if selector.prompt_visible() => {
            format!("Tema salvo: {}", label(selector.confirm()?))
        }
        ThemeRequest::Confirm => "Nenhuma prévia em aberto; use /themes".to_string(),
        ThemeRequest::Dismiss => {
            selector.dismiss();
            format!("Tema mantido: {}", label(selector.active()))
        }
    };
    Ok(message)
}
