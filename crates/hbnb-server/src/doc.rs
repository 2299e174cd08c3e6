//! OpenAPI documentation.
//!
//! [`ApiDoc`] collects every `/api/v1` endpoint and the request and response
//! records they exchange. The document is served as JSON at
//! `/api-docs/openapi.json` and browsed through Swagger UI at `/docs`.

use hbnb_core::{
    Amenity, AmenityPatch, AmenitySummary, NewAmenity, NewPlace, NewReview, NewUser,
    OwnerSummary, Place, PlacePatch, PlaceView, Review, ReviewPatch, User, UserPatch,
};
use utoipa::OpenApi;

use crate::handlers::{self, error::ErrorBody, reviews::MessageBody};

/// OpenAPI document for the HBnB API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "HBnB API",
        version = "1.0",
        description = "Users, amenities, places and reviews of the HBnB listing service."
    ),
    paths(
        handlers::users::list,
        handlers::users::create,
        handlers::users::get,
        handlers::users::update,
        handlers::amenities::list,
        handlers::amenities::create,
        handlers::amenities::get,
        handlers::amenities::update,
        handlers::places::list,
        handlers::places::create,
        handlers::places::get,
        handlers::places::update,
        handlers::places::reviews,
        handlers::reviews::create,
        handlers::reviews::get,
        handlers::reviews::update,
        handlers::reviews::delete,
    ),
    components(schemas(
        User,
        NewUser,
        UserPatch,
        Amenity,
        NewAmenity,
        AmenityPatch,
        Place,
        NewPlace,
        PlacePatch,
        PlaceView,
        OwnerSummary,
        AmenitySummary,
        Review,
        NewReview,
        ReviewPatch,
        ErrorBody,
        MessageBody,
    )),
    tags(
        (name = "users", description = "User operations"),
        (name = "amenities", description = "Amenity operations"),
        (name = "places", description = "Place operations"),
        (name = "reviews", description = "Review operations")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::openapi::schema::Schema;
    use utoipa::openapi::RefOr;

    fn properties(doc: &utoipa::openapi::OpenApi, name: &str) -> Vec<String> {
        let schemas = &doc.components.as_ref().expect("components").schemas;
        match schemas.get(name).expect("schema registered") {
            RefOr::T(Schema::Object(obj)) => obj.properties.keys().cloned().collect(),
            _ => panic!("expected Object schema for {name}"),
        }
    }

    #[test]
    fn test_every_route_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for expected in [
            "/api/v1/users",
            "/api/v1/users/{id}",
            "/api/v1/amenities",
            "/api/v1/amenities/{id}",
            "/api/v1/places",
            "/api/v1/places/{id}",
            "/api/v1/places/{id}/reviews",
            "/api/v1/reviews",
            "/api/v1/reviews/{id}",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {expected}"
            );
        }
    }

    #[test]
    fn test_request_schemas_list_their_fields() {
        let doc = ApiDoc::openapi();
        let fields = properties(&doc, "NewUser");
        assert!(fields.contains(&"email".to_string()));
        assert!(fields.contains(&"password".to_string()));

        let fields = properties(&doc, "NewPlace");
        assert!(fields.contains(&"owner_id".to_string()));
        assert!(fields.contains(&"amenity_ids".to_string()));
    }
}
