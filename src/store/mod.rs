//! Durable key-value persistence for the focus value.
//!
//! The widget only ever touches one key, but the store is a plain string map
//! so unrelated keys written by other tools survive a round trip.

mod file;
mod memory;

use std::path::PathBuf;
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access store at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("store at {} is not valid TOML: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize store: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// A device-local string store. `remove` of an absent key is a no-op.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

