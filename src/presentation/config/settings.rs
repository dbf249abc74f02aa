use config::{Config, ConfigError, Environment as EnvironmentSource, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub llm: LlmSettings,
    pub logging: LoggingSettings,
    pub uploads: UploadSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LlmSettings {
    /// Gemini API key. The relay still starts without one and reports it per request.
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub max_file_size_mb: usize,
}

impl UploadSettings {
    pub fn max_body_bytes(&self) -> usize {
        self.max_file_size_mb * 1024 * 1024
    }
}

impl Settings {
    /// Defaults, then `appsettings.{environment}` if present, then `APP__*`
    /// variables. `GEMINI_API_KEY` wins over every other key source.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .set_default("uploads.max_file_size_mb", 20)?
            .add_source(
                File::with_name(&environment.settings_file()).required(false),
            )
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .set_override_option("llm.api_key", std::env::var("GEMINI_API_KEY").ok())?
            .build()?
            .try_deserialize()
    }
}
