//! Durable key/value storage for the persisted preference.
//!
//! This module provides:
//!
//! - [`PreferenceStore`]: The storage port the resolver reads and writes
//! - [`MemoryStore`]: In-process map, optionally unavailable or read-only
//! - [`FileStore`]: JSON file on disk, the native stand-in for local storage
//! - [`NullStore`]: A store that is never available
//! - [`PersistenceUnavailable`]: The single error class stores report
//!
//! Values are plain strings; decoding them into a theme is the resolver's
//! job, so a store never needs to know what a theme is.

mod error;
mod file;
mod memory;

pub use error::PersistenceUnavailable;
pub use file::{default_store_path, FileStore};
pub use memory::MemoryStore;

/// A string key/value store that survives process restarts.
pub trait PreferenceStore {
    /// Reports whether this environment has storage at all.
    ///
    /// When this returns `false` the resolver skips every read and write.
    fn is_available(&self) -> bool {
        true
    }

    /// Reads the value stored under `key`, `Ok(None)` when it is missing.
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceUnavailable>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceUnavailable>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &mut T {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn get(&self, key: &str) -> Result<Option<String>, PersistenceUnavailable> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceUnavailable> {
        (**self).set(key, value)
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn get(&self, key: &str) -> Result<Option<String>, PersistenceUnavailable> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceUnavailable> {
        (**self).set(key, value)
    }
}

/// Storage for environments that have none, such as server-side rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl PreferenceStore for NullStore {
    fn is_available(&self) -> bool {
        false
    }

    fn get(&self, _key: &str) -> Result<Option<String>, PersistenceUnavailable> {
        Err(PersistenceUnavailable::NoStorage)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), PersistenceUnavailable> {
        Err(PersistenceUnavailable::NoStorage)
    }
}
