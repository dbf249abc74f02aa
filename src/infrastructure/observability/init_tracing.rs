use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use super::TracingConfig;

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Installs the relay's global subscriber. Exactly one of the JSON and plain
/// layers is active, chosen by `config.json_format`.
pub fn init_tracing(config: TracingConfig, port: u16) {
    let json_layer = config.json_format.then(|| {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
    });
    let plain_layer = (!config.json_format).then(|| {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
    });

    tracing_subscriber::registry()
        .with(filter_or(&config.default_filter()))
        .with(json_layer)
        .with(plain_layer)
        .init();

    tracing::info!(
        port,
        environment = %config.environment,
        json_format = config.json_format,
        "StudyBot relay logging ready"
    );
}

/// Terminal client logging goes to stderr at `warn` so chat output on stdout stays clean.
pub fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(filter_or("warn"))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
