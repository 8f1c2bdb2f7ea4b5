use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::storage::{Storage, StorageError};

/// In-memory Storage for testing and non-web fallback.
///
/// Clones share the same map, so a test can keep a handle and inspect what the
/// session wrote.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate slots, e.g. to simulate what a previous page load left behind.
    pub fn with_items<'a>(items: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let storage = Self::new();
        storage.items().extend(
            items
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        storage
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    fn items(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{TOKEN_KEY, USER_KEY};

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.get_item(TOKEN_KEY).unwrap().is_none());

        storage.set_item(TOKEN_KEY, "abc").unwrap();
        assert_eq!(storage.get_item(TOKEN_KEY).unwrap().as_deref(), Some("abc"));

        storage.remove_item(TOKEN_KEY).unwrap();
        assert!(storage.get_item(TOKEN_KEY).unwrap().is_none());

        // Removing a missing key is fine
        storage.remove_item(TOKEN_KEY).unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_clones_share_items() {
        let storage = MemoryStorage::with_items([(USER_KEY, "{}")]);
        let handle = storage.clone();
        storage.set_item(TOKEN_KEY, "abc").unwrap();
        assert!(handle.contains(TOKEN_KEY));
        assert_eq!(handle.len(), 2);
    }
}
