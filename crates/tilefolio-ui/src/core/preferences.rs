//! Key/value preference storage and the tile tint handoff.
//!
//! Storage is best effort. Callers log failures and carry on with defaults,
//! so nothing in this module ever aborts a render.

use std::collections::HashMap;

use thiserror::Error;
use tracing::warn;

/// Failure reported by a [`PreferenceStore`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Reading a key failed.
    #[error("failed to read preference '{key}': {detail}")]
    Read {
        /// Key being read.
        key: String,
        /// Backend detail.
        detail: String,
    },
    /// Writing a key failed.
    #[error("failed to write preference '{key}': {detail}")]
    Write {
        /// Key being written.
        key: String,
        /// Backend detail.
        detail: String,
    },
}

/// String key/value store (browser local or session storage in the app).
pub trait PreferenceStore {
    /// Read `key`; `Ok(None)` when it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend fails.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend fails.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store with switchable failures.
#[derive(Clone, Debug, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryPreferenceStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    /// Make every subsequent read fail.
    #[must_use]
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Make every subsequent write and remove fail.
    #[must_use]
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Raw value, bypassing failure injection.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Read {
                key: key.to_string(),
                detail: "injected failure".to_string(),
            });
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Write {
                key: key.to_string(),
                detail: "injected failure".to_string(),
            });
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Write {
                key: key.to_string(),
                detail: "injected failure".to_string(),
            });
        }
        self.values.remove(key);
        Ok(())
    }
}

/// One-shot color handoff from an activated tile to the next page background.
#[derive(Debug)]
pub struct TintHandoff<P> {
    store: P,
    key: String,
}

impl<P: PreferenceStore> TintHandoff<P> {
    /// Handoff stored under `key`.
    pub fn new(store: P, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Record the color of the tile being left.
    pub fn write(&mut self, color: &str) {
        if let Err(err) = self.store.set(&self.key, color) {
            warn!(error = %err, "unable to hand off tile color");
        }
    }

    /// Read the handed-off color once and clear it.
    ///
    /// The key is cleared even when the read fails.
    pub fn take(&mut self) -> Option<String> {
        let color = match self.store.get(&self.key) {
            Ok(value) => value.filter(|color| !color.trim().is_empty()),
            Err(err) => {
                warn!(error = %err, "unable to read handed-off tile color");
                None
            }
        };
        if let Err(err) = self.store.remove(&self.key) {
            warn!(error = %err, "unable to clear handed-off tile color");
        }
        color
    }

    /// Backing store.
    pub const fn store(&self) -> &P {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "metro-tile-color";

    #[test]
    fn handoff_is_read_once() {
        let mut handoff = TintHandoff::new(MemoryPreferenceStore::new(), KEY);
        handoff.write("#00a300");
        assert_eq!(handoff.take().as_deref(), Some("#00a300"));
        assert_eq!(handoff.take(), None);
        assert_eq!(handoff.store().peek(KEY), None);
    }

    #[test]
    fn failed_read_is_absent_and_still_clears() {
        let store = MemoryPreferenceStore::with_entry(KEY, "#ffffff").failing_reads();
        let mut handoff = TintHandoff::new(store, KEY);
        assert_eq!(handoff.take(), None);
        assert_eq!(handoff.store().peek(KEY), None);
    }

    #[test]
    fn failed_write_is_swallowed() {
        let store = MemoryPreferenceStore::new().failing_writes();
        let mut handoff = TintHandoff::new(store, KEY);
        handoff.write("#123456");
        assert_eq!(handoff.store().peek(KEY), None);
    }

    #[test]
    fn blank_handoff_is_ignored() {
        let store = MemoryPreferenceStore::with_entry(KEY, "  ");
        let mut handoff = TintHandoff::new(store, KEY);
        assert_eq!(handoff.take(), None);
    }

    #[test]
    fn storage_errors_name_the_key() {
        let err = StorageError::Write {
            key: "metro-theme".to_string(),
            detail: "quota exceeded".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to write preference 'metro-theme': quota exceeded"
        );
    }
}
