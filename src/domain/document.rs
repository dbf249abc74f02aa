/// Kinds of upload the assistant can read text from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Pdf,
    Text,
}

impl ContentType {
    /// `application/pdf` or any `text/*` type. MIME parameters such as
    /// `; charset=utf-8` and letter case are ignored.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split_once(';').map_or(mime, |(essence, _)| essence).trim();
        let (top, sub) = essence.split_once('/')?;

        if top.eq_ignore_ascii_case("text") && !sub.is_empty() {
            Some(Self::Text)
        } else if top.eq_ignore_ascii_case("application") && sub.eq_ignore_ascii_case("pdf") {
            Some(Self::Pdf)
        } else {
            None
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Text => "text/plain",
        }
    }
}

/// Metadata of an uploaded file whose text is about to be extracted.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub filename: String,
    pub content_type: ContentType,
    pub size_bytes: u64,
}

impl Document {
    pub fn new(filename: String, content_type: ContentType, size_bytes: u64) -> Self {
        Self {
            filename,
            content_type,
            size_bytes,
        }
    }
}
