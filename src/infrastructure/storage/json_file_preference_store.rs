use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::application::ports::{PreferenceStore, PreferenceStoreError};

/// Preferences kept as a flat JSON object on disk. A missing file reads as empty.
pub struct JsonFilePreferenceStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PreferenceStoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(PreferenceStoreError::Io(e)),
        };

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&raw).map_err(|e| PreferenceStoreError::Corrupt(e.to_string()))
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceStoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceStoreError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| PreferenceStoreError::Corrupt(e.to_string()))?;

        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let serialized = serde_json::to_string_pretty(&values)
            .map_err(|e| PreferenceStoreError::Corrupt(e.to_string()))?;
        std::fs::write(&self.path, serialized)?;

        tracing::debug!(key, path = %self.path.display(), "Preference saved");
        Ok(())
    }
}
