use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::ports::LlmClient;
use crate::domain::{ContentType, Document};
use crate::presentation::state::AppState;

use super::api_types::{ErrorResponse, ExtractResponse, NO_FILE_ERROR, UNSUPPORTED_FILE_ERROR};

const FILE_FIELD: &str = "file";

fn bad_request(error: impl Into<String>) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(error))).into_response()
}

/// Accepts a multipart upload with a `file` field and answers with its text.
/// Unreadable documents still get a 200 with an explanation in `text`.
#[tracing::instrument(skip_all)]
pub async fn extract_handler<L>(
    State(state): State<AppState<L>>,
    upload: Result<Multipart, MultipartRejection>,
) -> impl IntoResponse
where
    L: LlmClient + 'static,
{
    let mut multipart = match upload {
        Ok(multipart) => multipart,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Upload is not multipart");
            return bad_request(format!("Falha ao ler o envio: {}", rejection.body_text()));
        }
    };

    let (filename, content_type_str, data) = loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => {
                tracing::warn!("Extraction request with no file");
                return bad_request(NO_FILE_ERROR);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return bad_request(format!("Falha ao ler o envio: {}", e));
            }
        };

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or("arquivo").to_string();
        let content_type_str = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        match field.bytes().await {
            Ok(data) => break (filename, content_type_str, data),
            Err(e) => {
                tracing::error!(error = %e, "Failed to read file bytes");
                return bad_request(format!("Falha ao ler o arquivo: {}", e));
            }
        }
    };

    tracing::debug!(
        filename = %filename,
        content_type = %content_type_str,
        bytes = data.len(),
        "Processing file upload"
    );

    let Some(content_type) = ContentType::from_mime(&content_type_str) else {
        tracing::warn!(content_type = %content_type_str, "Unsupported content type");
        return bad_request(UNSUPPORTED_FILE_ERROR);
    };

    let document = Document::new(filename, content_type, data.len() as u64);

    match state.extraction_service.extract(&data, &document).await {
        Ok(text) => {
            tracing::info!(filename = %document.filename, chars = text.chars().count(), "Extraction finished");
            (StatusCode::OK, Json(ExtractResponse { text })).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Extraction rejected");
            bad_request(UNSUPPORTED_FILE_ERROR)
        }
    }
}
