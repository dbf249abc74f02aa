use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::Document;

pub enum MockFileLoader {
    Text(String),
    NoText,
    Failure(String),
}

#[async_trait::async_trait]
impl FileLoader for MockFileLoader {
    async fn extract_text(&self, _data: &[u8], doc: &Document) -> Result<String, FileLoaderError> {
        match self {
            MockFileLoader::Text(text) => Ok(text.clone()),
            MockFileLoader::NoText => Err(FileLoaderError::NoTextFound(doc.filename.clone())),
            MockFileLoader::Failure(reason) => {
                Err(FileLoaderError::ExtractionFailed(reason.clone()))
            }
        }
    }
}
