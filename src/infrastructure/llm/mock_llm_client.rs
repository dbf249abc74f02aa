use std::sync::Mutex;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::ChatPrompt;

pub enum MockReply {
    Text(String),
    Empty,
    MissingCredentials,
    UpstreamStatus(u16),
}

/// Canned model that remembers the last prompt it was given.
pub struct MockLlmClient {
    reply: MockReply,
    last_prompt: Mutex<Option<ChatPrompt>>,
}

impl MockLlmClient {
    pub fn new(reply: MockReply) -> Self {
        Self {
            reply,
            last_prompt: Mutex::new(None),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(MockReply::Text(text.to_string()))
    }

    pub fn last_prompt(&self) -> Option<ChatPrompt> {
        self.last_prompt.lock().ok().and_then(|slot| slot.clone())
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn generate(&self, prompt: &ChatPrompt) -> Result<String, LlmClientError> {
        if let Ok(mut slot) = self.last_prompt.lock() {
            *slot = Some(prompt.clone());
        }

        match &self.reply {
            MockReply::Text(text) => Ok(text.clone()),
            MockReply::Empty => Err(LlmClientError::EmptyCompletion),
            MockReply::MissingCredentials => Err(LlmClientError::MissingCredentials),
            MockReply::UpstreamStatus(code) => Err(LlmClientError::UpstreamStatus(*code)),
        }
    }
}
