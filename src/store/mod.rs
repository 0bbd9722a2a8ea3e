//! Durable session record backends.
//!
//! The record is three string entries under fixed keys (see [`keys`]). Backends
//! write and remove them as a group; there is no versioning, so two processes
//! sharing a backend are last-write-wins.

pub mod keys;

mod file;
mod memory;
mod redis_store;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::SessionBackend;
use crate::error::StoreError;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;
pub use redis_store::RedisSessionStore;

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Writes every entry in one step.
    async fn set_all(&self, entries: &[(&str, String)]) -> Result<(), StoreError>;

    /// Removes every listed key in one step. Missing keys are not an error.
    async fn remove_all(&self, keys: &[&str]) -> Result<(), StoreError>;
}

/// Opens the backend selected by configuration.
pub fn open_store(backend: &SessionBackend) -> Result<Arc<dyn SessionStore>, StoreError> {
    let store: Arc<dyn SessionStore> = match backend {
        SessionBackend::File(path) => Arc::new(FileSessionStore::new(path.clone())),
        SessionBackend::Redis { url, namespace } => {
            Arc::new(RedisSessionStore::open(url, namespace)?)
        }
        SessionBackend::Memory => Arc::new(MemorySessionStore::new()),
    };
    Ok(store)
}
