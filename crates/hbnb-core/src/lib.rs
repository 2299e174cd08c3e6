//! HBnB Core Library
//!
//! The in-memory relational core of the listing service: a type-partitioned
//! store and the facade that enforces cross-entity references, keeps
//! back-reference lists in step, and composes place views.

// Re-export pure types from hbnb-types
pub use hbnb_types::*;

pub mod error;
pub mod services;
pub mod storage;

pub use error::{HbnbError, ReferenceError, Result};
pub use services::HbnbFacade;
pub use storage::MemoryStore;
