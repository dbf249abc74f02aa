use crate::application::ports::{PreferenceStore, PreferenceStoreError};
use crate::domain::Theme;

pub const THEME_KEY: &str = "studybot-theme";
pub const THEME_SELECTED_KEY: &str = "studybot-theme-selected";

/// Theme state: the confirmed theme, the one being previewed, and whether the
/// first-run selection prompt is showing.
pub struct ThemeSelector<S: PreferenceStore> {
    store: S,
    active: Theme,
    preview: Theme,
    prompt_visible: bool,
}

impl<S: PreferenceStore> ThemeSelector<S> {
    pub fn load(store: S) -> Result<Self, PreferenceStoreError> {
        let active = match store.get(THEME_KEY)? {
            Some(saved) => saved.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Ignoring saved theme");
                Theme::default()
            }),
            None => Theme::default(),
        };
        let prompt_visible = store.get(THEME_SELECTED_KEY)?.is_none();

        Ok(Self {
            store,
            active,
            preview: active,
            prompt_visible,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn active(&self) -> Theme {
        self.active
    }

    pub fn preview_theme(&self) -> Theme {
        self.preview
    }

    pub fn prompt_visible(&self) -> bool {
        self.prompt_visible
    }

    /// Theme currently applied to the page.
    pub fn applied(&self) -> Theme {
        if self.prompt_visible {
            self.preview
        } else {
            self.active
        }
    }

    pub fn open_prompt(&mut self) {
        self.preview = self.active;
        self.prompt_visible = true;
    }

    pub fn preview(&mut self, theme: Theme) {
        self.preview = theme;
    }

    pub fn confirm(&mut self) -> Result<Theme, PreferenceStoreError> {
        self.active = self.preview;
        self.store.set(THEME_KEY, self.active.as_str())?;
        self.store.set(THEME_SELECTED_KEY, "true")?;
        self.prompt_visible = false;
        Ok(self.active)
    }

    pub fn dismiss(&mut self) {
        self.preview = self.active;
        self.prompt_visible = false;
    }

    pub fn cycle(&mut self) -> Result<Theme, PreferenceStoreError> {
        self.active = self.active.next();
        self.preview = self.active;
        self.store.set(THEME_KEY, self.active.as_str())?;
        Ok(self.active)
    }
}
