//! Desktop preference store: a JSON object in the platform data directory.

use directories::ProjectDirs;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use yuvasetu_core::{PreferenceStore, StoreError};

const PREFERENCES_FILENAME: &str = "preferences.json";

/// Key-value pairs persisted as one JSON object. The whole file is rewritten
/// on each change; it only ever holds a handful of keys.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Opens the store in the platform data directory
    /// (e.g. `~/.local/share/yuvasetu/` on Linux).
    pub fn open_default() -> Result<Self, StoreError> {
        let dirs = ProjectDirs::from("ai", "YuvaSetu", "YuvaSetu").ok_or_else(|| {
            StoreError::Unavailable("Failed to determine data directory".to_string())
        })?;
        let data_dir = dirs.data_dir();
        std::fs::create_dir_all(data_dir)
            .map_err(|e| StoreError::Io(format!("Failed to create data directory: {}", e)))?;
        Ok(Self::at(data_dir.join(PREFERENCES_FILENAME)))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<HashMap<String, String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(StoreError::Io(e.to_string())),
        }
    }

    fn save(&self, values: &HashMap<String, String>) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(values)?;
        std::fs::write(&self.path, contents).map_err(|e| StoreError::Io(e.to_string()))
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());
        self.save(&values)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut values = self.load()?;
        if values.remove(key).is_some() {
            self.save(&values)?;
        }
        Ok(())
    }
}
