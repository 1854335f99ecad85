//! Storage layer for monospend
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation, behind the `RecordStore` trait.

pub mod document;
pub mod memory;
pub mod store;

pub use document::{Document, DocumentFile};
pub use memory::MemoryStore;
pub use store::{JsonFileStore, RecordStore};
