use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{ChatPrompt, GenerationConfig};

pub const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash-exp:generateContent";

pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    endpoint: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<RequestContent>,
    pub generation_config: RequestGenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct RequestContent {
    pub role: &'static str,
    pub parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
pub struct RequestPart {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestGenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl From<&ChatPrompt> for GenerateContentRequest {
    fn from(prompt: &ChatPrompt) -> Self {
        Self {
            contents: prompt
                .turns
                .iter()
                .map(|turn| RequestContent {
                    role: turn.role.as_str(),
                    parts: vec![RequestPart {
                        text: turn.text.clone(),
                    }],
                })
                .collect(),
            generation_config: prompt.generation.into(),
        }
    }
}

impl From<GenerationConfig> for RequestGenerationConfig {
    fn from(config: GenerationConfig) -> Self {
        Self {
            temperature: config.temperature,
            top_k: config.top_k,
            top_p: config.top_p,
            max_output_tokens: config.max_output_tokens,
        }
    }
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}

impl GeminiClient {
    /// Blank keys count as missing.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            endpoint: GEMINI_API_URL.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    #[tracing::instrument(skip_all, fields(turns = prompt.turns.len()))]
    async fn generate(&self, prompt: &ChatPrompt) -> Result<String, LlmClientError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(LlmClientError::MissingCredentials)?;

        let request_body = GenerateContentRequest::from(prompt);

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", api_key)])
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %body, "Gemini request rejected");
            return Err(LlmClientError::UpstreamStatus(status.as_u16()));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.without_url().to_string()))?;

        match parsed.first_text() {
            Some(text) if !text.is_empty() => Ok(text.to_string()),
            _ => Err(LlmClientError::EmptyCompletion),
        }
    }
}
