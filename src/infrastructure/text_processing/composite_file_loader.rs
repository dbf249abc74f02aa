use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

use super::{PdfAdapter, PlainTextAdapter};

/// Routes each document to the loader registered for its content type.
pub struct CompositeFileLoader {
    loaders: HashMap<ContentType, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(loaders: Vec<(ContentType, Arc<dyn FileLoader>)>) -> Self {
        Self {
            loaders: loaders.into_iter().collect(),
        }
    }

    pub fn with_default_adapters() -> Self {
        let pdf: Arc<dyn FileLoader> = Arc::new(PdfAdapter::new());
        let text: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);
        Self::new(vec![(ContentType::Pdf, pdf), (ContentType::Text, text)])
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(&self, data: &[u8], document: &Document) -> Result<String, FileLoaderError> {
        match self.loaders.get(&document.content_type) {
            Some(loader) => loader.extract_text(data, document).await,
            None => {
                tracing::warn!(content_type = ?document.content_type, "No loader registered");
                Err(FileLoaderError::UnsupportedContentType(
                    document.content_type.as_mime().to_string(),
                ))
            }
        }
    }
}
