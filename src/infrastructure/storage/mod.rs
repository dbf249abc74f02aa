mod json_file_preference_store;
mod memory_preference_store;

pub use json_file_preference_store::JsonFilePreferenceStore;
pub use memory_preference_store::MemoryPreferenceStore;
