//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod storage;
pub mod store;
pub mod workspace;

pub use config::Config;
pub use storage::{FileStorage, MemoryStorage, StorageBackend};
pub use store::{EntryStore, STORAGE_KEY};
pub use workspace::Workspace;
