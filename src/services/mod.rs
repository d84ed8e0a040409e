//! Services - persistence behind the layout

pub mod storage;
pub mod widths;

pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use widths::{ProjectId, ProjectKey, StoredWidths, WidthStore};
