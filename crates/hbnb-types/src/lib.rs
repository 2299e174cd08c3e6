//! HBnB Types - Pure entity records for the listing service
//!
//! This crate contains the four entity records (users, amenities, places,
//! reviews), their creation drafts and partial-update patches, and the
//! composed read views. Records validate themselves; cross-entity rules live
//! in `hbnb-core`.

pub mod amenity;
pub mod entity;
pub mod place;
pub mod review;
pub mod user;
pub mod validation;
pub mod view;

pub use amenity::*;
pub use entity::*;
pub use place::*;
pub use review::*;
pub use user::*;
pub use validation::{ValidationError, ValidationResult};
pub use view::*;
