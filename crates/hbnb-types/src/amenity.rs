//! Amenity types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{Entity, EntityKind, Metadata};
use crate::validation::{require_text, ValidationResult};

/// A feature a place can offer, such as WiFi or a pool
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Amenity {
    #[serde(flatten)]
    pub meta: Metadata,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewAmenity {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct AmenityPatch {
    pub name: Option<String>,
}

impl Amenity {
    pub fn new(draft: NewAmenity) -> ValidationResult<Self> {
        require_text("name", &draft.name)?;
        Ok(Self {
            meta: Metadata::new(),
            name: draft.name,
        })
    }
}

impl Entity for Amenity {
    const KIND: EntityKind = EntityKind::Amenity;
    type Patch = AmenityPatch;

    fn meta(&self) -> &Metadata {
        &self.meta
    }

    fn apply(&mut self, patch: AmenityPatch) -> ValidationResult<()> {
        if let Some(name) = patch.name {
            require_text("name", &name)?;
            self.name = name;
        }
        self.meta.touch();
        Ok(())
    }
}
