// Shipped collaborator implementations: file-backed reader and writers

pub mod json;
pub mod memory;
pub mod snapshot;

pub use json::JsonTarget;
pub use memory::MemoryTarget;
pub use snapshot::SnapshotSource;
