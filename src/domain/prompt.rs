use super::MessageRole;

/// Role names the generative model expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptRole {
    User,
    Model,
}

impl PromptRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptRole::User => "user",
            PromptRole::Model => "model",
        }
    }

    /// Anything other than `"user"` is treated as a model turn.
    pub fn from_history_role(role: &str) -> Self {
        if role == "user" {
            PromptRole::User
        } else {
            PromptRole::Model
        }
    }
}

impl From<MessageRole> for PromptRole {
    fn from(role: MessageRole) -> Self {
        match role {
            MessageRole::User => PromptRole::User,
            MessageRole::Assistant => PromptRole::Model,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PromptTurn {
    pub role: PromptRole,
    pub text: String,
}

impl PromptTurn {
    pub fn new(role: PromptRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl GenerationConfig {
    /// Tighter sampling and a larger budget for answers grounded in uploaded files.
    pub const DOCUMENT: GenerationConfig = GenerationConfig {
        temperature: 0.3,
        top_k: 20,
        top_p: 0.8,
        max_output_tokens: 4096,
    };

    pub const CONVERSATIONAL: GenerationConfig = GenerationConfig {
        temperature: 0.7,
        top_k: 40,
        top_p: 0.95,
        max_output_tokens: 2048,
    };
}

/// Fully formatted request for the generative model.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatPrompt {
    pub turns: Vec<PromptTurn>,
    pub generation: GenerationConfig,
}

impl ChatPrompt {
    pub fn last_turn(&self) -> Option<&PromptTurn> {
        self.turns.last()
    }
}
