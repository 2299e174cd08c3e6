//! Storage layer
//!
//! Everything lives in process memory; nothing survives a restart.

pub mod memory;

pub use memory::{MemoryStore, Stored, Table};
