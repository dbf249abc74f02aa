mod http_assistant_api;

pub use http_assistant_api::{CHAT_PATH, EXTRACT_PATH, HttpAssistantApi};
