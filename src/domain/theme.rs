use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    DarkBlue,
    DarkBlack,
    Light,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::DarkBlue, Theme::DarkBlack, Theme::Light];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::DarkBlue => "dark-blue",
            Theme::DarkBlack => "dark-black",
            Theme::Light => "light",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::DarkBlue => "Dark Azul",
            Theme::DarkBlack => "Dark Preto",
            Theme::Light => "Tema Claro",
        }
    }

    /// Next theme in the cycle, wrapping around.
    pub fn next(&self) -> Theme {
        match self {
            Theme::DarkBlue => Theme::DarkBlack,
            Theme::DarkBlack => Theme::Light,
            Theme::Light => Theme::DarkBlue,
        }
    }

    pub fn is_dark(&self) -> bool {
        !matches!(self, Theme::Light)
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark-blue" => Ok(Theme::DarkBlue),
            "dark-black" => Ok(Theme::DarkBlack),
            "light" => Ok(Theme::Light),
            other => Err(format!(
                "Invalid theme: {}. Expected: dark-blue, dark-black, or light",
                other
            )),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
