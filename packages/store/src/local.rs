//! # Browser `localStorage` backend
//!
//! [`LocalStorage`] is the [`Storage`] implementation used on the **web platform**.
//! It is a zero-size handle that looks up `window.localStorage` on every call; the
//! browser keeps the underlying object alive, so there is nothing to cache.
//!
//! A missing `window` (e.g. a worker context) or a disabled storage API surfaces as
//! [`StorageError::Unavailable`]. Write failures (quota exceeded, private mode) do
//! the same.

use crate::storage::{Storage, StorageError};

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn backend(&self) -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

fn unavailable(op: &str, key: &str, e: wasm_bindgen::JsValue) -> StorageError {
    tracing::warn!(key, "localStorage {} failed: {:?}", op, e);
    StorageError::Unavailable(format!("{e:?}"))
}

impl Storage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.backend()?
            .get_item(key)
            .map_err(|e| unavailable("read", key, e))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.backend()?
            .set_item(key, value)
            .map_err(|e| unavailable("write", key, e))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.backend()?
            .remove_item(key)
            .map_err(|e| unavailable("remove", key, e))
    }
}
