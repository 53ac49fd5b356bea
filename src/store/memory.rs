//! In-process preference store.

use std::collections::HashMap;

use super::{PersistenceUnavailable, PreferenceStore};

/// A [`PreferenceStore`] backed by a `HashMap`.
///
/// Besides the normal writable mode it can imitate the two ways browser
/// storage misbehaves: being absent entirely ([`MemoryStore::unavailable`])
/// and refusing writes ([`MemoryStore::read_only`]), as happens with quota
/// limits or private browsing.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    available: bool,
    writable: bool,
}

impl MemoryStore {
    /// Creates an empty, writable store.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            available: true,
            writable: true,
        }
    }

    /// Creates a store that reports no storage in this environment.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// Makes every subsequent write fail, keeping reads working.
    pub fn read_only(mut self) -> Self {
        self.writable = false;
        self
    }

    /// Adds an entry, returning an updated store for chaining.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for MemoryStore {
    fn is_available(&self) -> bool {
        self.available
    }

    fn get(&self, key: &str) -> Result<Option<String>, PersistenceUnavailable> {
        if !self.available {
            return Err(PersistenceUnavailable::NoStorage);
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceUnavailable> {
        if !self.available {
            return Err(PersistenceUnavailable::NoStorage);
        }
        if !self.writable {
            return Err(PersistenceUnavailable::rejected("store is read-only"));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("absent").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let mut store = MemoryStore::new().with("k", "old");
        store.set("k", "new").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("new"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_read_only_keeps_reads() {
        let mut store = MemoryStore::new().with("k", "v").read_only();
        assert!(store.is_available());
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));

        let err = store.set("k", "other").unwrap_err();
        assert!(matches!(err, PersistenceUnavailable::Rejected { .. }));
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_unavailable_fails_everything() {
        let mut store = MemoryStore::unavailable();
        assert!(!store.is_available());
        assert!(store.get("k").is_err());
        assert!(store.set("k", "v").is_err());
        assert!(store.is_empty());
    }
}
