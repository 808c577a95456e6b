//! String key-value storage
//!
//! `LocalStore` wraps `window.localStorage` on wasm32. `MemoryStore` backs
//! native builds, tests, and browsers with storage disabled.

use std::collections::HashMap;

use super::dialogs::Dialogs;
use crate::error::StorageError;

/// Warning shown when records can only live for the current page
pub const NO_STORAGE_WARNING: &str =
    "Your browser does not support local storage. Your records won't be stored.";

/// Opaque string store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Whether values survive a page reload
    fn is_persistent(&self) -> bool {
        true
    }
}

/// Process-lifetime store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one entry
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.items.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn is_persistent(&self) -> bool {
        false
    }
}

/// Use `store` if it opened, otherwise warn the user and fall back to memory
pub fn store_or_fallback<S>(
    store: Result<S, StorageError>,
    dialogs: &mut dyn Dialogs,
) -> Box<dyn KeyValueStore>
where
    S: KeyValueStore + 'static,
{
    match store {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("Persistent storage unavailable ({e}), best time kept in memory");
            dialogs.warn(NO_STORAGE_WARNING);
            Box::new(MemoryStore::new())
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::LocalStore;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::KeyValueStore;
    use crate::error::StorageError;

    /// `window.localStorage`
    pub struct LocalStore {
        storage: web_sys::Storage,
    }

    impl LocalStore {
        /// Fails when there is no window or storage access is blocked
        pub fn open() -> Result<Self, StorageError> {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok())
                .flatten()
                .ok_or(StorageError::Unavailable)?;
            Ok(Self { storage })
        }
    }

    impl KeyValueStore for LocalStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.storage.get_item(key).map_err(|_| StorageError::Rejected {
                op: "read",
                key: key.to_string(),
            })
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.storage.set_item(key, value).map_err(|_| StorageError::Rejected {
                op: "write",
                key: key.to_string(),
            })
        }
    }
}
