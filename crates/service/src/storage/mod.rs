//! Storage abstractions for the service layer
//!
//! A store holds one keyed collection of records and is always loaded and
//! saved as a whole. File-backed and in-memory implementations share the
//! same JSON serialisation.

pub mod collection_store;
pub mod json_map_store;
pub mod memory_store;

pub use collection_store::{remove_and_save, Collection, CollectionStore};
pub use json_map_store::JsonMapStore;
pub use memory_store::MemoryMapStore;
