//! Composed read views

use serde::Serialize;
use utoipa::ToSchema;

use crate::amenity::Amenity;
use crate::place::Place;
use crate::review::Review;
use crate::user::User;

/// Owner fields embedded in a place view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct OwnerSummary {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<&User> for OwnerSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.meta.id.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

/// Amenity fields embedded in a place view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AmenitySummary {
    pub id: String,
    pub name: String,
}

impl From<&Amenity> for AmenitySummary {
    fn from(amenity: &Amenity) -> Self {
        Self {
            id: amenity.meta.id.clone(),
            name: amenity.name.clone(),
        }
    }
}

/// A place with its owner, amenities and reviews resolved inline.
///
/// `owner` is `None` when the owner id no longer resolves; amenity and
/// review ids that do not resolve are left out.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlaceView {
    #[serde(flatten)]
    pub place: Place,
    pub owner: Option<OwnerSummary>,
    pub amenities: Vec<AmenitySummary>,
    pub reviews: Vec<Review>,
}
