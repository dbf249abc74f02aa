use async_trait::async_trait;

use crate::domain::{Attachment, Message};

/// Client-side view of the relay: document extraction and chat.
#[async_trait]
pub trait AssistantApi: Send + Sync {
    async fn extract_text(&self, attachment: &Attachment) -> Result<String, AssistantApiError>;

    async fn chat(&self, message: &str, history: &[Message]) -> Result<String, AssistantApiError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AssistantApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("relay returned HTTP {0}")]
    Status(u16),
    #[error("relay reported an error: {0}")]
    Relay(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
