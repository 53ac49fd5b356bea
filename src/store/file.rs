//! Preference store backed by a JSON file.
//!
//! The file holds a flat JSON object, which mirrors what browser local
//! storage offers:
//!
//! ```json
//! { "vectorlab-theme": "dark", "window-width": 1280 }
//! ```
//!
//! Other tools may share the file, so entries this store did not write are
//! kept as-is, whatever their JSON type. Only string values are returned by
//! [`PreferenceStore::get`]; a key holding anything else reads as missing.
//!
//! Each write re-reads the file, updates one key and replaces the file by
//! persisting a sibling temporary file over it, so a crash mid-write leaves
//! either the old or the new content on disk.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use serde_json::Value;
use tempfile::NamedTempFile;

use super::{PersistenceUnavailable, PreferenceStore};

const STORE_DIR: &str = "vectorlab";
const STORE_FILE: &str = "preferences.json";

static DEFAULT_PATH: Lazy<Option<PathBuf>> =
    Lazy::new(|| dirs::config_dir().map(|dir| dir.join(STORE_DIR).join(STORE_FILE)));

/// Returns `<config_dir>/vectorlab/preferences.json`, or `None` when the
/// platform has no configuration directory.
pub fn default_store_path() -> Option<&'static Path> {
    DEFAULT_PATH.as_deref()
}

type Entries = BTreeMap<String, Value>;

/// A [`PreferenceStore`] persisted as a JSON object on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at [`default_store_path`].
    pub fn at_default_location() -> Result<Self, PersistenceUnavailable> {
        default_store_path()
            .map(Self::new)
            .ok_or(PersistenceUnavailable::NoStorage)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Entries, PersistenceUnavailable> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(Entries::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Entries::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, entries: &Entries) -> Result<(), PersistenceUnavailable> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        // The temp file is deleted on drop, so any early return cleans up.
        let mut file = NamedTempFile::new_in(parent)?;
        serde_json::to_writer_pretty(&mut file, entries)?;
        file.write_all(b"\n")?;
        file.as_file().sync_all()?;

        file.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceUnavailable> {
        match self.load()?.remove(key) {
            Some(Value::String(value)) => Ok(Some(value)),
            Some(other) => {
                tracing::debug!(key, value = %other, "ignoring non-string preference entry");
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceUnavailable> {
        // A corrupt file is replaced rather than blocking every future write.
        let mut entries = match self.load() {
            Ok(entries) => entries,
            Err(PersistenceUnavailable::Corrupt(err)) => {
                tracing::warn!(path = %self.path.display(), error = %err, "discarding corrupt preference file");
                Entries::new()
            }
            Err(err) => return Err(err),
        };
        entries.insert(key.to_string(), Value::String(value.to_string()));
        self.save(&entries)
    }
}
