/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub level: String,
    pub json_format: bool,
}

impl TracingConfig {
    pub fn new(environment: impl Into<String>, level: impl Into<String>, json_format: bool) -> Self {
        Self {
            environment: environment.into(),
            level: level.into(),
            json_format,
        }
    }

    /// Filter used when `RUST_LOG` is not set.
    pub fn default_filter(&self) -> String {
        format!("{},studybot=debug,tower_http=debug", self.level)
    }
}
