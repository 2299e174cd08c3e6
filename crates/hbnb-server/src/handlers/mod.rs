//! HTTP handlers

pub mod amenities;
pub mod error;
pub mod health;
pub mod places;
pub mod reviews;
pub mod users;

pub use error::ApiError;
pub use health::health;
