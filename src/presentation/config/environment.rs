use std::fmt;
use std::str::FromStr;

pub const ENVIRONMENT_VAR: &str = "APP_ENVIRONMENT";

/// Deployment stage. Picks the optional `appsettings.{stage}` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Local,
    Test,
    Prod,
}

impl Environment {
    /// Unset means `Local`; an unrecognised value is an error.
    pub fn from_env() -> Result<Self, String> {
        std::env::var(ENVIRONMENT_VAR).map_or(Ok(Self::default()), |value| value.parse())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "Local",
            Environment::Test => "Test",
            Environment::Prod => "Prod",
        }
    }

    pub fn settings_file(&self) -> String {
        format!("appsettings.{}", self.as_str().to_ascii_lowercase())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stage = s.trim();
        [Environment::Local, Environment::Test, Environment::Prod]
            .into_iter()
            .find(|env| env.as_str().eq_ignore_ascii_case(stage))
            .or_else(|| stage.eq_ignore_ascii_case("production").then_some(Environment::Prod))
            .ok_or_else(|| format!("unknown {}: {:?} (expected local, test or prod)", ENVIRONMENT_VAR, s))
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
