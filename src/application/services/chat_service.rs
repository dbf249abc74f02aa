use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::PromptTurn;

use super::prompt_builder::build_prompt;

pub const EMPTY_REPLY_FALLBACK: &str = "Desculpe, não consegui gerar uma resposta.";

pub struct ChatService<L>
where
    L: LlmClient + ?Sized,
{
    llm_client: Arc<L>,
}

impl<L> ChatService<L>
where
    L: LlmClient + ?Sized,
{
    pub fn new(llm_client: Arc<L>) -> Self {
        Self { llm_client }
    }

    #[tracing::instrument(skip_all, fields(history_len = history.len()))]
    pub async fn reply(
        &self,
        message: &str,
        history: &[PromptTurn],
    ) -> Result<String, ChatServiceError> {
        let prompt = build_prompt(message, history);

        tracing::debug!(
            turns = prompt.turns.len(),
            temperature = prompt.generation.temperature,
            max_output_tokens = prompt.generation.max_output_tokens,
            "Forwarding chat prompt"
        );

        match self.llm_client.generate(&prompt).await {
            Ok(text) => Ok(text),
            Err(LlmClientError::EmptyCompletion) => {
                tracing::warn!("Model returned no text, using fallback reply");
                Ok(EMPTY_REPLY_FALLBACK.to_string())
            }
            Err(LlmClientError::MissingCredentials) => Err(ChatServiceError::MissingCredentials),
            Err(e) => Err(ChatServiceError::Upstream(e)),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChatServiceError {
    #[error("model credentials are not configured")]
    MissingCredentials,
    #[error("upstream: {0}")]
    Upstream(LlmClientError),
}
