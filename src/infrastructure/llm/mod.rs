mod gemini_client;
mod mock_llm_client;

pub use gemini_client::{
    GEMINI_API_URL, GeminiClient, GenerateContentRequest, GenerateContentResponse,
};
pub use mock_llm_client::{MockLlmClient, MockReply};
