mod assistant_api;
mod file_loader;
mod llm_client;
mod preference_store;

pub use assistant_api::{AssistantApi, AssistantApiError};
pub use file_loader::{FileLoader, FileLoaderError};
pub use llm_client::{LlmClient, LlmClientError};
pub use preference_store::{PreferenceStore, PreferenceStoreError};
