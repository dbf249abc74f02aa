use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::ports::LlmClient;
use crate::application::services::ChatServiceError;
use crate::domain::{PromptRole, PromptTurn};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::api_types::{
    ChatRequest, ChatResponse, EMPTY_MESSAGE_ERROR, ErrorResponse, INTERNAL_ERROR,
    INVALID_REQUEST_ERROR, MISSING_API_KEY_ERROR,
};

#[tracing::instrument(skip_all)]
pub async fn chat_handler<L>(
    State(state): State<AppState<L>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> impl IntoResponse
where
    L: LlmClient + 'static,
{
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Malformed chat request");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(INVALID_REQUEST_ERROR)),
            )
                .into_response();
        }
    };

    tracing::debug!(
        prompt = %sanitize_prompt(&request.message),
        history_len = request.history.len(),
        "Processing chat message"
    );

    if request.message.trim().is_empty() {
        tracing::warn!("Chat request with empty message");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(EMPTY_MESSAGE_ERROR)),
        )
            .into_response();
    }

    let history: Vec<PromptTurn> = request
        .history
        .iter()
        .map(|m| PromptTurn::new(PromptRole::from_history_role(&m.role), m.content.clone()))
        .collect();

    match state.chat_service.reply(&request.message, &history).await {
        Ok(response) => {
            tracing::info!(reply_chars = response.chars().count(), "Chat reply generated");
            (StatusCode::OK, Json(ChatResponse { response })).into_response()
        }
        Err(ChatServiceError::MissingCredentials) => {
            tracing::error!("Gemini API key is not configured");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(MISSING_API_KEY_ERROR)),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Chat relay failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(INTERNAL_ERROR)),
            )
                .into_response()
        }
    }
}
