use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use crate::application::ports::{AssistantApi, AssistantApiError};
use crate::domain::{Attachment, Message};

pub const EXTRACT_PATH: &str = "/api/extract-pdf";
pub const CHAT_PATH: &str = "/api/chat";

/// Talks to a running relay server over HTTP.
pub struct HttpAssistantApi {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    history: Vec<HistoryEntry<'a>>,
}

#[derive(Serialize)]
struct HistoryEntry<'a> {
    id: String,
    content: &'a str,
    role: &'static str,
    timestamp: DateTime<Utc>,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct ExtractResponse {
    #[serde(default)]
    text: Option<String>,
}

impl HttpAssistantApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl<'a> From<&'a Message> for HistoryEntry<'a> {
    fn from(message: &'a Message) -> Self {
        Self {
            id: message.id.as_uuid().to_string(),
            content: &message.content,
            role: message.role.as_str(),
            timestamp: message.timestamp,
        }
    }
}

#[async_trait]
impl AssistantApi for HttpAssistantApi {
    #[tracing::instrument(skip_all, fields(filename = %attachment.filename))]
    async fn extract_text(&self, attachment: &Attachment) -> Result<String, AssistantApiError> {
        let part = Part::bytes(attachment.data.clone())
            .file_name(attachment.filename.clone())
            .mime_str(&attachment.mime_type)
            .map_err(|e| AssistantApiError::Transport(e.to_string()))?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.url(EXTRACT_PATH))
            .multipart(form)
            .send()
            .await
            .map_err(|e| AssistantApiError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AssistantApiError::Status(response.status().as_u16()));
        }

        let body: ExtractResponse = response
            .json()
            .await
            .map_err(|e| AssistantApiError::InvalidResponse(e.to_string()))?;

        Ok(body.text.unwrap_or_default())
    }

    #[tracing::instrument(skip_all, fields(history_len = history.len()))]
    async fn chat(&self, message: &str, history: &[Message]) -> Result<String, AssistantApiError> {
        let request = ChatRequest {
            message,
            history: history.iter().map(HistoryEntry::from).collect(),
        };

        let response = self
            .client
            .post(self.url(CHAT_PATH))
            .json(&request)
            .send()
            .await
            .map_err(|e| AssistantApiError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AssistantApiError::Status(response.status().as_u16()));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| AssistantApiError::InvalidResponse(e.to_string()))?;

        if let Some(error) = body.error {
            return Err(AssistantApiError::Relay(error));
        }

        Ok(body.response.unwrap_or_default())
    }
}
