//! Place types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{Entity, EntityKind, Metadata};
use crate::validation::{
    check_latitude, check_longitude, check_price, dedup_ids, require_text, ValidationResult,
};

/// A property listed for rent
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Place {
    #[serde(flatten)]
    pub meta: Metadata,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: String,
    pub amenity_ids: Vec<String>,
    /// Reviews left for this place, in creation order; views embed the
    /// reviews themselves instead
    #[serde(skip_serializing)]
    pub review_ids: Vec<String>,
}

/// Place creation request
///
/// Owner and amenity existence is checked by the facade, not here.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewPlace {
    #[schema(example = "Beach House")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: String,
    #[serde(default)]
    pub amenity_ids: Vec<String>,
}

/// Partial place update
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PlacePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub owner_id: Option<String>,
    pub amenity_ids: Option<Vec<String>>,
}

impl Place {
    pub fn new(draft: NewPlace) -> ValidationResult<Self> {
        require_text("title", &draft.title)?;
        check_price(draft.price)?;
        check_latitude(draft.latitude)?;
        check_longitude(draft.longitude)?;

        Ok(Self {
            meta: Metadata::new(),
            title: draft.title,
            description: draft.description,
            price: draft.price,
            latitude: draft.latitude,
            longitude: draft.longitude,
            owner_id: draft.owner_id,
            amenity_ids: dedup_ids(draft.amenity_ids),
            review_ids: Vec::new(),
        })
    }
}

impl Entity for Place {
    const KIND: EntityKind = EntityKind::Place;
    type Patch = PlacePatch;

    fn meta(&self) -> &Metadata {
        &self.meta
    }

    fn apply(&mut self, patch: PlacePatch) -> ValidationResult<()> {
        if let Some(title) = &patch.title {
            require_text("title", title)?;
        }
        if let Some(price) = patch.price {
            check_price(price)?;
        }
        if let Some(latitude) = patch.latitude {
            check_latitude(latitude)?;
        }
        if let Some(longitude) = patch.longitude {
            check_longitude(longitude)?;
        }

        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(latitude) = patch.latitude {
            self.latitude = latitude;
        }
        if let Some(longitude) = patch.longitude {
            self.longitude = longitude;
        }
        if let Some(owner_id) = patch.owner_id {
            self.owner_id = owner_id;
        }
        if let Some(amenity_ids) = patch.amenity_ids {
            self.amenity_ids = dedup_ids(amenity_ids);
        }
        self.meta.touch();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;
    use rstest::rstest;

    fn flat() -> NewPlace {
        NewPlace {
            title: "Nice Flat".to_string(),
            description: String::new(),
            price: 99.0,
            latitude: 48.85,
            longitude: 2.35,
            owner_id: "owner-1".to_string(),
            amenity_ids: vec![],
        }
    }

    #[rstest]
    #[case(0.0, 0.0, 0.0)]
    #[case(10.0, 90.0, 180.0)]
    #[case(10.0, -90.0, -180.0)]
    fn test_boundaries_accepted(#[case] price: f64, #[case] lat: f64, #[case] lon: f64) {
        let place = Place::new(NewPlace {
            price,
            latitude: lat,
            longitude: lon,
            ..flat()
        });
        assert!(place.is_ok());
    }

    #[rstest]
    #[case(-1.0, 0.0, 0.0, ValidationError::NegativePrice)]
    #[case(1.0, 90.01, 0.0, ValidationError::LatitudeOutOfRange)]
    #[case(1.0, -91.0, 0.0, ValidationError::LatitudeOutOfRange)]
    #[case(1.0, 0.0, 180.5, ValidationError::LongitudeOutOfRange)]
    #[case(-1.0, 100.0, 200.0, ValidationError::NegativePrice)]
    fn test_out_of_range_rejected(
        #[case] price: f64,
        #[case] lat: f64,
        #[case] lon: f64,
        #[case] expected: ValidationError,
    ) {
        let err = Place::new(NewPlace {
            price,
            latitude: lat,
            longitude: lon,
            ..flat()
        })
        .unwrap_err();
        assert_eq!(err, expected);
    }

    #[test]
    fn test_integer_price_accepted_from_json() {
        let draft: NewPlace = serde_json::from_value(serde_json::json!({
            "title": "Loft",
            "price": 120,
            "latitude": 10,
            "longitude": -20,
            "owner_id": "owner-1",
        }))
        .unwrap();
        let place = Place::new(draft).unwrap();
        assert_eq!(place.price, 120.0);
        assert_eq!(place.description, "");
        assert!(place.amenity_ids.is_empty());
    }

    #[test]
    fn test_duplicate_amenities_collapsed() {
        let place = Place::new(NewPlace {
            amenity_ids: vec!["a".into(), "b".into(), "a".into()],
            ..flat()
        })
        .unwrap();
        assert_eq!(place.amenity_ids, vec!["a", "b"]);
    }

    #[test]
    fn test_invalid_patch_is_not_partially_applied() {
        let mut place = Place::new(flat()).unwrap();
        let err = place
            .apply(PlacePatch {
                title: Some("Renamed".to_string()),
                price: Some(50.0),
                longitude: Some(500.0),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err, ValidationError::LongitudeOutOfRange);
        assert_eq!(place.title, "Nice Flat");
        assert_eq!(place.price, 99.0);
    }

    #[test]
    fn test_patch_keeps_unset_fields() {
        let mut place = Place::new(flat()).unwrap();
        place
            .apply(PlacePatch {
                price: Some(75.0),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(place.price, 75.0);
        assert_eq!(place.title, "Nice Flat");
        assert_eq!(place.latitude, 48.85);
    }
}
