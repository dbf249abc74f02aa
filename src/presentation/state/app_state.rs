use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::application::services::{ChatService, ExtractionService};
use crate::presentation::config::Settings;

pub struct AppState<L>
where
    L: LlmClient,
{
    pub chat_service: Arc<ChatService<L>>,
    pub extraction_service: Arc<ExtractionService>,
    pub settings: Settings,
}

impl<L> Clone for AppState<L>
where
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            chat_service: Arc::clone(&self.chat_service),
            extraction_service: Arc::clone(&self.extraction_service),
            settings: self.settings.clone(),
        }
    }
}
