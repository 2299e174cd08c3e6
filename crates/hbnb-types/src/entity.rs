//! Shared entity plumbing: kinds, identity, timestamps

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::ValidationResult;

/// The four stored entity types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    User,
    Amenity,
    Place,
    Review,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::User => write!(f, "User"),
            EntityKind::Amenity => write!(f, "Amenity"),
            EntityKind::Place => write!(f, "Place"),
            EntityKind::Review => write!(f, "Review"),
        }
    }
}

/// Identifier and timestamps carried by every entity.
///
/// None of these can be set through a patch.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Metadata {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Metadata {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh `updated_at`; never moves it backwards.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.updated_at);
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::new()
    }
}

/// A record the store can hold and update in place.
pub trait Entity: Clone + Send + Sync + 'static {
    const KIND: EntityKind;

    /// Optional-field update payload; absent fields keep their value.
    type Patch;

    fn meta(&self) -> &Metadata;

    /// Validate every present field, then apply them and refresh `updated_at`.
    ///
    /// On error the entity is left exactly as it was.
    fn apply(&mut self, patch: Self::Patch) -> ValidationResult<()>;

    fn id(&self) -> &str {
        &self.meta().id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_metadata_has_equal_timestamps() {
        let meta = Metadata::new();
        assert_eq!(meta.created_at, meta.updated_at);
        assert!(uuid::Uuid::parse_str(&meta.id).is_ok());
    }

    #[test]
    fn test_touch_is_monotonic() {
        let mut meta = Metadata::new();
        let before = meta.updated_at;
        meta.touch();
        assert!(meta.updated_at >= before);
        assert_eq!(meta.created_at, before);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Metadata::new();
        let b = Metadata::new();
        assert_ne!(a.id, b.id);
    }
}
