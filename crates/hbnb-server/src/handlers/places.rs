//! Place handlers
//!
//! Every place response is the composed view with owner, amenities and
//! reviews embedded.

use crate::handlers::error::{ApiError, ErrorBody};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use hbnb_core::{NewPlace, PlacePatch, PlaceView, Review};

#[utoipa::path(
    get,
    path = "/api/v1/places",
    tag = "places",
    responses((status = 200, description = "All places, composed", body = [PlaceView]))
)]
pub async fn list(State(state): State<AppState>) -> Json<Vec<PlaceView>> {
    Json(state.facade.list_places())
}

#[utoipa::path(
    post,
    path = "/api/v1/places",
    tag = "places",
    request_body = NewPlace,
    responses(
        (status = 201, description = "Place created", body = PlaceView),
        (status = 400, description = "Invalid input data or unknown owner/amenity", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewPlace>, JsonRejection>,
) -> Result<(StatusCode, Json<PlaceView>), ApiError> {
    let Json(draft) = payload?;
    let place = state.facade.create_place(draft)?;
    Ok((StatusCode::CREATED, Json(place)))
}

#[utoipa::path(
    get,
    path = "/api/v1/places/{id}",
    tag = "places",
    params(("id" = String, Path, description = "Place id")),
    responses(
        (status = 200, description = "Place with owner, amenities and reviews", body = PlaceView),
        (status = 404, description = "Place not found", body = ErrorBody)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PlaceView>, ApiError> {
    state
        .facade
        .get_place(&id)
        .map(Json)
        .ok_or(ApiError::NotFound("Place not found"))
}

#[utoipa::path(
    put,
    path = "/api/v1/places/{id}",
    tag = "places",
    params(("id" = String, Path, description = "Place id")),
    request_body = PlacePatch,
    responses(
        (status = 200, description = "Place updated", body = PlaceView),
        (status = 400, description = "Invalid input data or unknown owner/amenity", body = ErrorBody),
        (status = 404, description = "Place not found", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<PlacePatch>, JsonRejection>,
) -> Result<Json<PlaceView>, ApiError> {
    let Json(patch) = payload?;
    state
        .facade
        .update_place(&id, patch)?
        .map(Json)
        .ok_or(ApiError::NotFound("Place not found"))
}

#[utoipa::path(
    get,
    path = "/api/v1/places/{id}/reviews",
    tag = "places",
    params(("id" = String, Path, description = "Place id")),
    responses(
        (status = 200, description = "Reviews left for the place", body = [Review]),
        (status = 404, description = "Place not found", body = ErrorBody)
    )
)]
pub async fn reviews(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Review>>, ApiError> {
    if !state.facade.place_exists(&id) {
        return Err(ApiError::NotFound("Place not found"));
    }
    Ok(Json(state.facade.list_reviews_for_place(&id)))
}
