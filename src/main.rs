use std::sync::Arc;

use tokio::net::TcpListener;

use studybot::application::services::{ChatService, ExtractionService};
use studybot::infrastructure::llm::GeminiClient;
use studybot::infrastructure::observability::{TracingConfig, init_tracing};
use studybot::infrastructure::text_processing::CompositeFileLoader;
use studybot::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(
        TracingConfig::new(
            environment.as_str(),
            settings.logging.level.clone(),
            settings.logging.enable_json,
        ),
        settings.server.port,
    );

    let llm_client = Arc::new(GeminiClient::new(settings.llm.api_key.clone()));
    if !llm_client.has_credentials() {
        tracing::warn!("GEMINI_API_KEY is not set; chat requests will fail until it is configured");
    }

    let state = AppState {
        chat_service: Arc::new(ChatService::new(llm_client)),
        extraction_service: Arc::new(ExtractionService::new(Arc::new(
            CompositeFileLoader::with_default_adapters(),
        ))),
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
