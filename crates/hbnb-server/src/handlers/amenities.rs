//! Amenity handlers

use crate::handlers::error::{ApiError, ErrorBody};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use hbnb_core::{Amenity, AmenityPatch, NewAmenity};

#[utoipa::path(
    get,
    path = "/api/v1/amenities",
    tag = "amenities",
    responses((status = 200, description = "All amenities", body = [Amenity]))
)]
pub async fn list(State(state): State<AppState>) -> Json<Vec<Amenity>> {
    Json(state.facade.list_amenities())
}

#[utoipa::path(
    post,
    path = "/api/v1/amenities",
    tag = "amenities",
    request_body = NewAmenity,
    responses(
        (status = 201, description = "Amenity created", body = Amenity),
        (status = 400, description = "Invalid input data", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewAmenity>, JsonRejection>,
) -> Result<(StatusCode, Json<Amenity>), ApiError> {
    let Json(draft) = payload?;
    let amenity = state.facade.create_amenity(draft)?;
    Ok((StatusCode::CREATED, Json(amenity)))
}

#[utoipa::path(
    get,
    path = "/api/v1/amenities/{id}",
    tag = "amenities",
    params(("id" = String, Path, description = "Amenity id")),
    responses(
        (status = 200, description = "Amenity details", body = Amenity),
        (status = 404, description = "Amenity not found", body = ErrorBody)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Amenity>, ApiError> {
    state
        .facade
        .get_amenity(&id)
        .map(Json)
        .ok_or(ApiError::NotFound("Amenity not found"))
}

#[utoipa::path(
    put,
    path = "/api/v1/amenities/{id}",
    tag = "amenities",
    params(("id" = String, Path, description = "Amenity id")),
    request_body = AmenityPatch,
    responses(
        (status = 200, description = "Amenity updated", body = Amenity),
        (status = 400, description = "Invalid input data", body = ErrorBody),
        (status = 404, description = "Amenity not found", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<AmenityPatch>, JsonRejection>,
) -> Result<Json<Amenity>, ApiError> {
    let Json(patch) = payload?;
    state
        .facade
        .update_amenity(&id, patch)?
        .map(Json)
        .ok_or(ApiError::NotFound("Amenity not found"))
}
