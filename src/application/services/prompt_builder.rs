use crate::domain::{ChatPrompt, GenerationConfig, PromptRole, PromptTurn};

pub const SYSTEM_PROMPT: &str = "Você é um ChatBot Escolar.";

/// Header that precedes every attachment block embedded in a user message.
pub const FILE_CONTENT_MARKER: &str = "Conteúdo do arquivo";

pub fn format_file_block(filename: &str, text: &str) -> String {
    format!("\n\n{} {}:\n{}", FILE_CONTENT_MARKER, filename, text)
}

pub fn contains_file_content(message: &str) -> bool {
    message.contains(FILE_CONTENT_MARKER)
}

pub fn select_generation_config(message: &str) -> GenerationConfig {
    if contains_file_content(message) {
        GenerationConfig::DOCUMENT
    } else {
        GenerationConfig::CONVERSATIONAL
    }
}

/// Lays out the conversation as system preamble, prior turns, then the new user turn.
pub fn build_prompt(message: &str, history: &[PromptTurn]) -> ChatPrompt {
    let mut turns = Vec::with_capacity(history.len() + 2);
    turns.push(PromptTurn::new(PromptRole::User, SYSTEM_PROMPT));
    turns.extend(history.iter().cloned());
    turns.push(PromptTurn::new(PromptRole::User, message));

    ChatPrompt {
        turns,
        generation: select_generation_config(message),
    }
}
