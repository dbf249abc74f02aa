use std::collections::HashMap;
use std::sync::RwLock;

use crate::application::ports::{PreferenceStore, PreferenceStoreError};

#[derive(Default)]
pub struct MemoryPreferenceStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(values: &[(&str, &str)]) -> Self {
        Self {
            values: RwLock::new(
                values
                    .iter()
                    .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                    .collect(),
            ),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceStoreError> {
        let values = self
            .values
            .read()
            .map_err(|e| PreferenceStoreError::Corrupt(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceStoreError> {
        let mut values = self
            .values
            .write()
            .map_err(|e| PreferenceStoreError::Corrupt(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
