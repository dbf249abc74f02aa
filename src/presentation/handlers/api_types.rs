use serde::{Deserialize, Serialize};

pub const NO_FILE_ERROR: &str = "Nenhum arquivo enviado";
pub const UNSUPPORTED_FILE_ERROR: &str = "Arquivo deve ser um PDF ou texto";
pub const EMPTY_MESSAGE_ERROR: &str = "Mensagem vazia";
pub const INVALID_REQUEST_ERROR: &str = "Requisição inválida";
pub const MISSING_API_KEY_ERROR: &str = "API key do Gemini não configurada";
pub const INTERNAL_ERROR: &str = "Erro interno do servidor";

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<HistoryMessage>,
}

/// Prior turn as sent by the client. Extra fields (`id`, `timestamp`) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryMessage {
    pub role: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
