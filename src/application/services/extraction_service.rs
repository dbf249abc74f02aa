use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::Document;

/// Turns loader failures into readable explanations instead of errors.
pub struct ExtractionService {
    file_loader: Arc<dyn FileLoader>,
}

impl ExtractionService {
    pub fn new(file_loader: Arc<dyn FileLoader>) -> Self {
        Self { file_loader }
    }

    #[tracing::instrument(skip(self, data), fields(filename = %document.filename, bytes = data.len()))]
    pub async fn extract(&self, data: &[u8], document: &Document) -> Result<String, ExtractionError> {
        match self.file_loader.extract_text(data, document).await {
            Ok(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
            Ok(_) | Err(FileLoaderError::NoTextFound(_)) => {
                tracing::info!("Document contains no extractable text");
                Ok(no_text_message(&document.filename))
            }
            Err(FileLoaderError::ExtractionFailed(reason)) => {
                tracing::warn!(reason = %reason, "Text extraction failed");
                Ok(extraction_failed_message(&document.filename))
            }
            Err(FileLoaderError::UnsupportedContentType(mime)) => {
                Err(ExtractionError::Unsupported(mime))
            }
        }
    }
}

pub fn extraction_failed_message(filename: &str) -> String {
    format!(
        "Não foi possível extrair texto do arquivo {}. O arquivo pode estar protegido, corrompido ou conter apenas imagens. Tente converter o PDF para texto manualmente ou cole o conteúdo diretamente no chat.",
        filename
    )
}

pub fn no_text_message(filename: &str) -> String {
    format!(
        "O arquivo {} não contém texto extraível. Pode ser um PDF com apenas imagens, gráficos ou estar protegido. Tente converter para texto ou cole o conteúdo manualmente.",
        filename
    )
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("unsupported content type: {0}")]
    Unsupported(String),
}
