//! # Filesystem-backed storage
//!
//! [`FileStorage`] is a [`Storage`] implementation that keeps one file per key under
//! a base directory. It is used on native builds so a session survives restarts the
//! way `localStorage` does in the browser.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── user      # JSON user profile
//! └── token     # raw bearer token
//! ```
//!
//! [`FileStorage::default_location`] uses [`dirs::data_dir()`]:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/barber-club/` |
//! | Linux | `~/.local/share/barber-club/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\barber-club\` |

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::storage::{Storage, StorageError};

/// Filesystem-backed Storage for native persistence.
#[derive(Clone, Debug)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Platform data directory, or the working directory if none is known.
    pub fn default_location() -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("barber-club");
        Self::new(base)
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn item_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.item_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                tracing::warn!(key, "Failed to read {}: {}", self.item_path(key).display(), e);
                Err(e.into())
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.base)
            .and_then(|()| std::fs::write(self.item_path(key), value))
            .map_err(|e| {
                tracing::warn!(key, "Failed to write {}: {}", self.item_path(key).display(), e);
                e.into()
            })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.item_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                tracing::warn!(key, "Failed to remove {}: {}", self.item_path(key).display(), e);
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::TOKEN_KEY;

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = std::env::temp_dir().join(format!("barber_club_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let storage = FileStorage::new(dir.clone());
        assert!(storage.get_item(TOKEN_KEY).unwrap().is_none());

        // Raw value, no quoting
        storage.set_item(TOKEN_KEY, "eyJhbGciOi.abc").unwrap();
        let on_disk = std::fs::read_to_string(dir.join(TOKEN_KEY)).unwrap();
        assert_eq!(on_disk, "eyJhbGciOi.abc");

        // Re-open from same directory
        let reopened = FileStorage::new(dir.clone());
        assert_eq!(
            reopened.get_item(TOKEN_KEY).unwrap().as_deref(),
            Some("eyJhbGciOi.abc")
        );

        reopened.remove_item(TOKEN_KEY).unwrap();
        reopened.remove_item(TOKEN_KEY).unwrap();
        assert!(storage.get_item(TOKEN_KEY).unwrap().is_none());

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_storage_write_error_is_reported() {
        // Base path is a regular file, so the directory cannot be created
        let blocker =
            std::env::temp_dir().join(format!("barber_club_blocker_{}", std::process::id()));
        std::fs::write(&blocker, "").unwrap();

        let storage = FileStorage::new(blocker.clone());
        let err = storage.set_item(TOKEN_KEY, "abc").unwrap_err();
        assert!(matches!(err, StorageError::Io(_)));

        let _ = std::fs::remove_file(&blocker);
    }
}
