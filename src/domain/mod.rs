mod attachment;
mod document;
mod message;
mod message_id;
mod message_role;
mod prompt;
mod theme;

pub use attachment::Attachment;
pub use document::{ContentType, Document};
pub use message::Message;
pub use message_id::MessageId;
pub use message_role::MessageRole;
pub use prompt::{ChatPrompt, GenerationConfig, PromptRole, PromptTurn};
pub use theme::Theme;
