use studybot::domain::{Attachment, ContentType, Document};

#[test]
fn given_pdf_mime_when_parsing_then_returns_pdf() {
    assert_eq!(ContentType::from_mime("application/pdf"), Some(ContentType::Pdf));
}

#[test]
fn given_text_mime_with_parameters_when_parsing_then_returns_text() {
    assert_eq!(
        ContentType::from_mime("text/plain; charset=utf-8"),
        Some(ContentType::Text)
    );
    assert_eq!(ContentType::from_mime("Text/Markdown"), Some(ContentType::Text));
}

#[test]
fn given_image_mime_when_parsing_then_returns_none() {
    assert_eq!(ContentType::from_mime("image/png"), None);
    assert_eq!(ContentType::from_mime(""), None);
}

#[test]
fn given_new_document_when_created_then_fields_are_set() {
    let doc = Document::new("aula.pdf".to_string(), ContentType::Pdf, 2048);

    assert_eq!(doc.filename, "aula.pdf");
    assert_eq!(doc.content_type, ContentType::Pdf);
    assert_eq!(doc.size_bytes, 2048);
}

#[test]
fn given_supported_attachment_when_describing_then_document_carries_size() {
    let attachment = Attachment::new("notas.txt", "text/plain", b"abc".to_vec());

    let doc = attachment.document().unwrap();

    assert_eq!(doc.content_type, ContentType::Text);
    assert_eq!(doc.size_bytes, 3);
}

#[test]
fn given_unsupported_attachment_when_describing_then_returns_none() {
    let attachment = Attachment::new("foto.png", "image/png", vec![0; 4]);

    assert!(attachment.content_type().is_none());
    assert!(attachment.document().is_none());
}
