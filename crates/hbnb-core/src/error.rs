//! Error types for the HBnB core

use hbnb_types::{EntityKind, ValidationError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HbnbError>;

/// An operation named a related entity that is not in the store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("owner {0} not found")]
    Owner(String),

    #[error("amenity {0} not found")]
    Amenity(String),

    #[error("user {0} not found")]
    User(String),

    #[error("place {0} not found")]
    Place(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HbnbError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Reference(#[from] ReferenceError),

    /// Generated ids collided; never expected in practice.
    #[error("{kind} {id} is already stored")]
    DuplicateId { kind: EntityKind, id: String },
}

impl HbnbError {
    /// Whether the caller caused this error and can fix the request.
    pub fn is_client_error(&self) -> bool {
        matches!(self, HbnbError::Validation(_) | HbnbError::Reference(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_pass_through() {
        let err = HbnbError::from(ValidationError::NegativePrice);
        assert_eq!(err.to_string(), "price must be >= 0");
        assert!(err.is_client_error());

        let err = HbnbError::from(ReferenceError::Owner("abc".to_string()));
        assert_eq!(err.to_string(), "owner abc not found");
        assert!(err.is_client_error());

        let err = HbnbError::DuplicateId {
            kind: EntityKind::Review,
            id: "r1".to_string(),
        };
        assert_eq!(err.to_string(), "Review r1 is already stored");
        assert!(!err.is_client_error());
    }
}
