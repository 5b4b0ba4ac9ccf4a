use crate::error::StorageError;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Durable key/value slots, one string value per key.
///
/// Writes overwrite the whole value; there is no partial update.
pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Keeps each key in its own `<key>.json` file inside a directory.
#[derive(Debug, Clone, PartialEq)]
pub struct FileStorage {
    directory: PathBuf,
}

impl FileStorage {
    pub fn new(directory: impl AsRef<Path>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn file_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let is_plain_name = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

        if !is_plain_name {
            return Err(StorageError::InvalidKey(key.to_string()));
        }

        Ok(self.directory.join(format!("{key}.json")))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.file_path(key)?;

        match fs::read_to_string(&path) {
            Ok(contents) => {
                trace!("Read {} bytes from {}", contents.len(), path.display());
                Ok(Some(contents))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("No stored value at {}", path.display());
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.file_path(key)?;

        fs::create_dir_all(&self.directory)?;
        fs::write(&path, value)?;

        trace!("Wrote {} bytes to {}", value.len(), path.display());

        Ok(())
    }
}

/// In-process storage; its contents last as long as the value does.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.items.insert(key.into(), value.into());
        self
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
