//! Client-side key-value persistence.
//!
//! The session writes credentials, the API client reads them on every
//! authenticated call. Backends: `window.localStorage` (browser crate),
//! [`FileStore`] (terminal), [`MemoryStore`] (tests and ephemeral use).


pub mod file;

pub use file::FileStore;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::api::Credentials;
use crate::config::CREDENTIALS_KEY;

/// Errors produced by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing storage is not available (no window, private mode, ...).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Reading or writing the backing file failed.
    #[error("storage io failed: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data is not valid JSON.
    #[error("storage data corrupt: {0}")]
    Corrupt(String),
}

/// String key to string value, last write wins.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

/// Store handle shared between the API client and the session.
pub type SharedStore = Rc<dyn KeyValueStore>;

// =============================================================================
// MEMORY
// =============================================================================

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn shared() -> SharedStore {
        Rc::new(Self::new())
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

// =============================================================================
// CREDENTIALS
// =============================================================================

/// Whether a non-empty credentials entry exists. Content is not validated.
#[must_use]
pub fn has_credentials(store: &dyn KeyValueStore) -> bool {
    match store.get_item(CREDENTIALS_KEY) {
        Ok(value) => value.is_some_and(|v| !v.is_empty()),
        Err(e) => {
            tracing::warn!(error = %e, "credential lookup failed");
            false
        }
    }
}

/// Stored credentials, or `None` when absent or undecodable.
#[must_use]
pub fn load_credentials(store: &dyn KeyValueStore) -> Option<Credentials> {
    let raw = match store.get_item(CREDENTIALS_KEY) {
        Ok(raw) => raw?,
        Err(e) => {
            tracing::warn!(error = %e, "credential lookup failed");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(credentials) => Some(credentials),
        Err(e) => {
            tracing::warn!(error = %e, "stored credentials are not valid JSON");
            None
        }
    }
}

/// Persist the pair as JSON `{username, password}`.
pub fn save_credentials(
    store: &dyn KeyValueStore,
    credentials: &Credentials,
) -> Result<(), StoreError> {
    let json =
        serde_json::to_string(credentials).map_err(|e| StoreError::Corrupt(e.to_string()))?;
    store.set_item(CREDENTIALS_KEY, &json)
}

pub fn clear_credentials(store: &dyn KeyValueStore) -> Result<(), StoreError> {
    store.remove_item(CREDENTIALS_KEY)
}
