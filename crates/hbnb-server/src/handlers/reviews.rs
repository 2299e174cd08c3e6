//! Review handlers

use crate::handlers::error::{ApiError, ErrorBody};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use hbnb_core::{NewReview, Review, ReviewPatch};
use serde::Serialize;
use utoipa::ToSchema;

/// Confirmation body for a completed deletion
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageBody {
    #[schema(example = "Review deleted")]
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/reviews",
    tag = "reviews",
    request_body = NewReview,
    responses(
        (status = 201, description = "Review created", body = Review),
        (status = 400, description = "Invalid input data or unknown user/place", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewReview>, JsonRejection>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    let Json(draft) = payload?;
    let review = state.facade.create_review(draft)?;
    Ok((StatusCode::CREATED, Json(review)))
}

#[utoipa::path(
    get,
    path = "/api/v1/reviews/{id}",
    tag = "reviews",
    params(("id" = String, Path, description = "Review id")),
    responses(
        (status = 200, description = "Review details", body = Review),
        (status = 404, description = "Review not found", body = ErrorBody)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Review>, ApiError> {
    state
        .facade
        .get_review(&id)
        .map(Json)
        .ok_or(ApiError::NotFound("Review not found"))
}

#[utoipa::path(
    put,
    path = "/api/v1/reviews/{id}",
    tag = "reviews",
    params(("id" = String, Path, description = "Review id")),
    request_body = ReviewPatch,
    responses(
        (status = 200, description = "Review updated", body = Review),
        (status = 400, description = "Invalid input data", body = ErrorBody),
        (status = 404, description = "Review not found", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ReviewPatch>, JsonRejection>,
) -> Result<Json<Review>, ApiError> {
    let Json(patch) = payload?;
    state
        .facade
        .update_review(&id, patch)?
        .map(Json)
        .ok_or(ApiError::NotFound("Review not found"))
}

#[utoipa::path(
    delete,
    path = "/api/v1/reviews/{id}",
    tag = "reviews",
    params(("id" = String, Path, description = "Review id")),
    responses(
        (status = 200, description = "Review deleted", body = MessageBody),
        (status = 404, description = "Review not found", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    if !state.facade.delete_review(&id) {
        return Err(ApiError::NotFound("Review not found"));
    }
    Ok(Json(MessageBody {
        message: "Review deleted".to_string(),
    }))
}
