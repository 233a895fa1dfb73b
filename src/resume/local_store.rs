use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocalStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LocalStoreError>;

/// String key/value storage that outlives the window, like `localStorage`.
pub trait LocalStore {
    /// Removing a key that is not present is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}

#[derive(Clone, Debug)]
pub struct FileLocalStore {
    path: PathBuf,
}

impl FileLocalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(map)?)?;
        Ok(())
    }
}

#[cfg(test)]
impl FileLocalStore {
    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_map()?.get(key).cloned())
    }

    pub fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }
}

impl LocalStore for FileLocalStore {
    fn remove_item(&self, key: &str) -> Result<()> {
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub use memory::MemoryLocalStore;

#[cfg(test)]
mod memory {
    use super::{LocalStore, Result};
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Debug, Default)]
    pub struct MemoryLocalStore {
        items: Arc<Mutex<BTreeMap<String, String>>>,
        removed: Arc<Mutex<Vec<String>>>,
    }

    impl MemoryLocalStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn removed_keys(&self) -> Vec<String> {
            self.removed.lock().unwrap().clone()
        }

        pub fn get_item(&self, key: &str) -> Option<String> {
            self.items.lock().unwrap().get(key).cloned()
        }

        pub fn set_item(&self, key: &str, value: &str) {
            self.items
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
        }
    }

    impl LocalStore for MemoryLocalStore {
        fn remove_item(&self, key: &str) -> Result<()> {
            self.items.lock().unwrap().remove(key);
            self.removed.lock().unwrap().push(key.to_string());
            Ok(())
        }
    }
}
