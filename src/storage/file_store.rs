use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::storage::traits::KeyValueStore;

const VALUE_EXTENSION: &str = "json";

/// Directory-backed store: each key is one `<key>.json` file.
///
/// Writes land in a temporary file next to the target and are renamed over
/// it, so a reader never sees a half-written value.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| {
                Error::Storage(format!(
                    "Failed to create data directory '{}': {}",
                    dir.display(),
                    e
                ))
            })?;
        }

        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.{}", key, VALUE_EXTENSION)))
    }
}

/// Keys become file names, so only `[A-Za-z0-9_-]` is accepted.
fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(Error::Invalid(format!("Invalid storage key '{}'", key)))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            tracing::trace!("No value stored for key {}", key);
            return Ok(None);
        }

        let value = fs::read_to_string(&path).map_err(|e| {
            Error::Storage(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        Ok(Some(value))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;

        let mut temp_file = tempfile::NamedTempFile::new_in(&self.dir).map_err(|e| {
            Error::Storage(format!(
                "Failed to create temporary file in '{}': {}",
                self.dir.display(),
                e
            ))
        })?;
        temp_file.write_all(value.as_bytes())?;
        temp_file.flush()?;

        temp_file.persist(&path).map_err(|e| {
            Error::Storage(format!("Failed to replace '{}': {}", path.display(), e))
        })?;

        tracing::trace!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                Error::Storage(format!("Failed to remove '{}': {}", path.display(), e))
            })?;
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.dir)?.flatten() {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(VALUE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                if validate_key(stem).is_ok() {
                    keys.push(stem.to_string());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}
