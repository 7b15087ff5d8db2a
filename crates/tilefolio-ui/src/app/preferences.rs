//! Browser storage behind the core [`PreferenceStore`] seam.

use gloo::storage::errors::StorageError as GlooStorageError;
use gloo::storage::{LocalStorage, SessionStorage, Storage};

use crate::core::preferences::{PreferenceStore, StorageError};

/// Which browser storage area to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BrowserStore {
    /// Durable across sessions; holds the theme.
    Local,
    /// Cleared with the tab; holds the tile tint handoff.
    Session,
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = match self {
            Self::Local => LocalStorage::get::<String>(key),
            Self::Session => SessionStorage::get::<String>(key),
        };
        match value {
            Ok(value) => Ok(Some(value)),
            Err(GlooStorageError::KeyNotFound(_)) => Ok(None),
            Err(err) => Err(StorageError::Read {
                key: key.to_string(),
                detail: err.to_string(),
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let result = match self {
            Self::Local => LocalStorage::set(key, value),
            Self::Session => SessionStorage::set(key, value),
        };
        result.map_err(|err| StorageError::Write {
            key: key.to_string(),
            detail: err.to_string(),
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        match self {
            Self::Local => LocalStorage::delete(key),
            Self::Session => SessionStorage::delete(key),
        }
        Ok(())
    }
}
