//! Service implementations
//!
//! Real implementations of the storage traits plus the persisted-collection
//! helpers layered on top of them.

pub mod collections;
pub mod file_store;
pub mod memory_store;

#[cfg(test)]
pub(crate) mod tests;

pub use file_store::FileKeyValueStore;
pub use memory_store::MemoryKeyValueStore;
