use std::sync::Arc;

use studybot::application::ports::{AssistantApi, AssistantApiError};
use studybot::application::services::{ChatSession, no_text_message};
use studybot::domain::{Attachment, Message, PromptRole};
use studybot::infrastructure::llm::{MockLlmClient, MockReply};
use studybot::infrastructure::relay::HttpAssistantApi;

use crate::support::{compressed_pdf, create_test_app, sample_pdf, spawn_server};

async fn relay_with(llm: Arc<MockLlmClient>) -> HttpAssistantApi {
    let base = spawn_server(create_test_app(llm)).await;
    HttpAssistantApi::new(&format!("{}/", base))
}

#[tokio::test]
async fn given_running_relay_when_chatting_then_returns_reply() {
    let llm = Arc::new(MockLlmClient::replying("Claro!"));
    let api = relay_with(Arc::clone(&llm)).await;
    let history = vec![Message::user("Oi"), Message::assistant("Olá")];

    let reply = api.chat("Pode ajudar?", &history).await.unwrap();

    assert_eq!(reply, "Claro!");
    let prompt = llm.last_prompt().unwrap();
    assert_eq!(prompt.turns.len(), 4);
    assert_eq!(prompt.turns[2].role, PromptRole::Model);
    assert_eq!(prompt.turns[3].text, "Pode ajudar?");
}

#[tokio::test]
async fn given_relay_without_key_when_chatting_then_returns_status_error() {
    let api = relay_with(Arc::new(MockLlmClient::new(MockReply::MissingCredentials))).await;

    let result = api.chat("Oi", &[]).await;

    assert!(matches!(result, Err(AssistantApiError::Status(500))));
}

#[tokio::test]
async fn given_pdf_attachment_when_extracting_then_returns_text() {
    let api = relay_with(Arc::new(MockLlmClient::replying("unused"))).await;
    let attachment = Attachment::new("aula.pdf", "application/pdf", sample_pdf());

    let text = api.extract_text(&attachment).await.unwrap();

    assert_eq!(text, "Fotossíntese converte luz em energia");
}

#[tokio::test]
async fn given_unreadable_pdf_when_extracting_then_returns_explanation() {
    let api = relay_with(Arc::new(MockLlmClient::replying("unused"))).await;
    let attachment = Attachment::new("scan.pdf", "application/pdf", compressed_pdf());

    let text = api.extract_text(&attachment).await.unwrap();

    assert_eq!(text, no_text_message("scan.pdf"));
}

#[tokio::test]
async fn given_image_attachment_when_extracting_then_returns_status_error() {
    let api = relay_with(Arc::new(MockLlmClient::replying("unused"))).await;
    let attachment = Attachment::new("foto.png", "image/png", vec![0x89, 0x50]);

    let result = api.extract_text(&attachment).await;

    assert!(matches!(result, Err(AssistantApiError::Status(400))));
}

#[tokio::test]
async fn given_stopped_relay_when_chatting_then_returns_transport_error() {
    let api = HttpAssistantApi::new("http://127.0.0.1:1");

    let result = api.chat("Oi", &[]).await;

    assert!(matches!(result, Err(AssistantApiError::Transport(_))));
}

#[tokio::test]
async fn given_session_over_relay_when_sending_pdf_then_model_sees_document_block() {
    let llm = Arc::new(MockLlmClient::replying("Resumo: fotossíntese."));
    let api = relay_with(Arc::clone(&llm)).await;
    let mut session = ChatSession::new(Arc::new(api));
    session
        .attach(vec![Attachment::new("aula.pdf", "application/pdf", sample_pdf())])
        .unwrap();

    let reply = session.send("Resuma").await.unwrap();

    assert_eq!(reply.content, "Resumo: fotossíntese.");
    let prompt = llm.last_prompt().unwrap();
    assert_eq!(
        prompt.last_turn().unwrap().text,
        "Resuma\n\nConteúdo do arquivo aula.pdf:\nFotossíntese converte luz em energia"
    );
    assert_eq!(prompt.generation.max_output_tokens, 4096);
}
