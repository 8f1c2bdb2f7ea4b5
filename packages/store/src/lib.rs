//! # Durable key/value storage for the client session
//!
//! The session store persists two slots across reloads: the user profile (JSON) and
//! the raw bearer token. Everything goes through the synchronous [`Storage`] trait so
//! the same session logic runs against browser `localStorage`, a directory on disk,
//! or an in-memory map in tests.
//!
//! | Backend | Platform |
//! |---------|----------|
//! | [`LocalStorage`] | WASM with the `web` feature |
//! | [`FileStorage`] | native (desktop, tests) |
//! | [`MemoryStorage`] | everywhere; tests and fallback |

mod storage;
pub use storage::{Storage, StorageError, TOKEN_KEY, USER_KEY};

mod memory;
pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;
