use std::collections::HashMap;

use crate::StorageError;

/// Key under which the whole cart list is stored.
pub const CART_STORAGE_KEY: &str = "jobCart";

/// Synchronous, string-valued key-value slot the cart mirrors itself into.
pub trait CartStorage {
    /// Returns `Ok(None)` when nothing is stored under `key`.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process storage; contents vanish with the process.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: impl Into<String>) -> Self {
        let mut storage = Self::default();
        storage.slots.insert(key.to_string(), value.into());
        storage
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
