use crate::domain::{Attachment, ContentType};

/// One line per queued file: name, kind and size.
pub fn describe_attachment(attachment: &Attachment) -> String {
    match attachment.document() {
        Some(doc) => {
            let kind = match doc.content_type {
                ContentType::Pdf => "PDF",
                ContentType::Text => "texto",
            };
            format!("{} ({}, {})", doc.filename, kind, format_size(doc.size_bytes))
        }
        None => format!("{} (não suportado)", attachment.filename),
    }
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
