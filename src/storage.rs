//! Durable Storage
//!
//! Key-value slot abstraction over `window.localStorage`.
//! The inventory only ever reads or overwrites whole values.

use crate::error::{StoreError, StoreResult};

/// Durable key-value storage backend
pub trait Storage {
    /// Read the value stored under `key`, `None` when absent
    fn read(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrite the value stored under `key`
    fn write(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// Browser local storage
///
/// Holds no handle: `web_sys::Storage` is looked up per call so the
/// backend can live inside the reactive store.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> StoreResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| StoreError::Storage("no window".into()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| StoreError::Storage("localStorage unavailable".into()))
    }
}

impl Storage for BrowserStorage {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| StoreError::Storage(format!("{:?}", e)))
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Storage(format!("{:?}", e)))
    }
}

#[cfg(test)]
pub use memory::MemoryStorage;

#[cfg(test)]
mod memory {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use super::Storage;
    use crate::error::{StoreError, StoreResult};

    /// In-memory storage shared between clones, standing in for a browser profile
    #[derive(Debug, Clone, Default)]
    pub struct MemoryStorage {
        slots: Arc<Mutex<HashMap<String, String>>>,
        writes: Arc<Mutex<usize>>,
        fail_writes: bool,
    }

    impl MemoryStorage {
        pub fn new() -> Self {
            Self::default()
        }

        /// Storage whose writes always fail (quota exceeded and the like)
        pub fn failing() -> Self {
            Self { fail_writes: true, ..Self::default() }
        }

        pub fn with(key: &str, value: &str) -> Self {
            let storage = Self::new();
            storage.slots.lock().unwrap().insert(key.to_string(), value.to_string());
            storage
        }

        pub fn raw(&self, key: &str) -> Option<String> {
            self.slots.lock().unwrap().get(key).cloned()
        }

        pub fn write_count(&self) -> usize {
            *self.writes.lock().unwrap()
        }
    }

    impl Storage for MemoryStorage {
        fn read(&self, key: &str) -> StoreResult<Option<String>> {
            Ok(self.raw(key))
        }

        fn write(&self, key: &str, value: &str) -> StoreResult<()> {
            if self.fail_writes {
                return Err(StoreError::Storage("quota exceeded".into()));
            }
            *self.writes.lock().unwrap() += 1;
            self.slots.lock().unwrap().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}
