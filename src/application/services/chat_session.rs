use std::sync::Arc;

use crate::application::ports::AssistantApi;
use crate::domain::{Attachment, ContentType, Message, MessageRole};

use super::chat_service::EMPTY_REPLY_FALLBACK;
use super::prompt_builder::format_file_block;

pub const MAX_ATTACHMENTS: usize = 5;

pub const RELAY_FAILURE_REPLY: &str = "Desculpe, ocorreu um erro ao processar sua mensagem. Verifique sua conexão e tente novamente.";

/// Conversation state for one user: the append-only message list and the
/// attachments queued for the next message.
pub struct ChatSession<A>
where
    A: AssistantApi + ?Sized,
{
    api: Arc<A>,
    messages: Vec<Message>,
    attachments: Vec<Attachment>,
}

impl<A> ChatSession<A>
where
    A: AssistantApi + ?Sized,
{
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            messages: Vec::new(),
            attachments: Vec::new(),
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Most recent assistant message, if any.
    pub fn last_reply(&self) -> Option<&Message> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::Assistant)
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Queues the PDF and text files of `batch`, silently skipping other types.
    /// The whole batch is refused when it would push the queue past the limit.
    pub fn attach(&mut self, batch: Vec<Attachment>) -> Result<usize, SessionError> {
        let supported: Vec<Attachment> = batch
            .into_iter()
            .filter(|a| a.content_type().is_some())
            .collect();

        let total = self.attachments.len() + supported.len();
        if total > MAX_ATTACHMENTS {
            tracing::warn!(total, "Attachment limit exceeded");
            return Err(SessionError::TooManyAttachments {
                attempted: total,
                max: MAX_ATTACHMENTS,
            });
        }

        let accepted = supported.len();
        self.attachments.extend(supported);
        Ok(accepted)
    }

    pub fn remove_attachment(&mut self, index: usize) -> Option<Attachment> {
        if index < self.attachments.len() {
            Some(self.attachments.remove(index))
        } else {
            None
        }
    }

    /// Sends `input` plus the text of every queued attachment and records both
    /// the user message and the assistant reply. Relay failures become an
    /// apology message rather than an error.
    #[tracing::instrument(skip_all, fields(attachments = self.attachments.len()))]
    pub async fn send(&mut self, input: &str) -> Result<&Message, SessionError> {
        if input.trim().is_empty() && self.attachments.is_empty() {
            return Err(SessionError::EmptyMessage);
        }

        let attachments = std::mem::take(&mut self.attachments);
        let file_contents = self.collect_file_contents(&attachments).await;
        let content = format!("{}{}", input, file_contents);

        let history_len = self.messages.len();
        self.messages.push(Message::user(content.clone()));

        let reply = match self
            .api
            .chat(&content, &self.messages[..history_len])
            .await
        {
            Ok(text) if text.is_empty() => EMPTY_REPLY_FALLBACK.to_string(),
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error = %e, "Chat relay failed");
                RELAY_FAILURE_REPLY.to_string()
            }
        };

        self.messages.push(Message::assistant(reply));
        Ok(&self.messages[self.messages.len() - 1])
    }

    async fn collect_file_contents(&self, attachments: &[Attachment]) -> String {
        let mut contents = String::new();

        for attachment in attachments {
            let name = &attachment.filename;
            match attachment.content_type() {
                Some(ContentType::Pdf) => {
                    let text = match self.api.extract_text(attachment).await {
                        Ok(text) if !text.is_empty() => text,
                        Ok(_) => format!("Não foi possível extrair texto do arquivo {}", name),
                        Err(e) => {
                            tracing::warn!(error = %e, filename = %name, "PDF extraction request failed");
                            format!(
                                "Erro ao processar o arquivo {}. Tente converter para .txt ou cole o texto diretamente.",
                                name
                            )
                        }
                    };
                    contents.push_str(&format_file_block(name, &text));
                }
                Some(ContentType::Text) => match std::str::from_utf8(&attachment.data) {
                    Ok(text) => contents.push_str(&format_file_block(name, text)),
                    Err(_) => contents.push_str(&format!("\n\nErro ao ler arquivo {}", name)),
                },
                None => {}
            }
        }

        contents
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("message is empty and no files are attached")]
    EmptyMessage,
    #[error("at most {max} files per message ({attempted} requested)")]
    TooManyAttachments { attempted: usize, max: usize },
}
