use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

use super::literal_text_scanner::extract_literal_text;

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(filename = %document.filename, bytes = data.len())
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Pdf {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let bytes = data.to_vec();
        let text = tokio::task::spawn_blocking(move || extract_literal_text(&bytes))
            .await
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))?;

        tracing::info!(chars = text.chars().count(), "PDF text extraction complete");

        if text.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(text)
    }
}
