//! Adapter implementations for the panel ports.

pub mod memory;

pub use memory::InMemoryHistoryStore;
