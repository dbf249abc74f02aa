/// Small string key/value store for UI preferences.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceStoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PreferenceStoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt preference file: {0}")]
    Corrupt(String),
}
