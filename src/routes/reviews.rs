use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::error::AppError;
use crate::models::NewReview;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/api/places/{id}/reviews",
        get(list_reviews).post(create_review),
    )
}

async fn list_reviews(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(place_id) = id?;
    let reviews = state.store.list_reviews_for_place(place_id).await?;
    Ok(Json(reviews))
}

async fn create_review(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<NewReview>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(place_id) = id?;
    let Json(new) = payload?;

    // Fails with a foreign key violation if the place does not exist.
    let review = state.store.create_review(place_id, new).await?;

    Ok((StatusCode::CREATED, Json(review)))
}
