use async_trait::async_trait;

use crate::domain::ChatPrompt;

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(&self, prompt: &ChatPrompt) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api credentials are not configured")]
    MissingCredentials,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("upstream returned HTTP {0}")]
    UpstreamStatus(u16),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("completion contained no text")]
    EmptyCompletion,
}
