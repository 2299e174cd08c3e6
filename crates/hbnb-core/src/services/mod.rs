//! Business logic services

pub mod facade;

pub use facade::HbnbFacade;
