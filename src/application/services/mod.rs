mod chat_service;
mod chat_session;
mod extraction_service;
mod prompt_builder;
mod theme_selector;

pub use chat_service::{ChatService, ChatServiceError, EMPTY_REPLY_FALLBACK};
pub use chat_session::{ChatSession, MAX_ATTACHMENTS, RELAY_FAILURE_REPLY, SessionError};
pub use extraction_service::{
    ExtractionError, ExtractionService, extraction_failed_message, no_text_message,
};
pub use prompt_builder::{
    FILE_CONTENT_MARKER, SYSTEM_PROMPT, build_prompt, contains_file_content, format_file_block,
    select_generation_config,
};
pub use theme_selector::{THEME_KEY, THEME_SELECTED_KEY, ThemeSelector};
