pub mod llm;
pub mod observability;
pub mod relay;
pub mod storage;
pub mod text_processing;
