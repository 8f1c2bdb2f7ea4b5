use thiserror::Error;

/// Slot holding the JSON-serialised user profile.
pub const USER_KEY: &str = "user";
/// Slot holding the bearer token as a raw, unquoted string.
pub const TOKEN_KEY: &str = "token";

/// The storage backend itself failed (quota, permissions, missing API).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Synchronous string key/value store.
///
/// Mirrors the browser `localStorage` contract: values are plain strings, a missing
/// key reads as `None`, and removing a missing key is not an error.
pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}
