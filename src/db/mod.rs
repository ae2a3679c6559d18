pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod store;

pub use store::{MemoryStore, STORAGE_KEY, SnapshotStore, SqliteStore};
