use super::{ContentType, Document};

/// A file queued for the next outgoing message.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub filename: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl Attachment {
    pub fn new(filename: impl Into<String>, mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            mime_type: mime_type.into(),
            data,
        }
    }

    /// `None` for anything that is neither a PDF nor a text file.
    pub fn content_type(&self) -> Option<ContentType> {
        ContentType::from_mime(&self.mime_type)
    }

    pub fn document(&self) -> Option<Document> {
        self.content_type().map(|content_type| {
            Document::new(
                self.filename.clone(),
                content_type,
                self.data.len() as u64,
            )
        })
    }
}
