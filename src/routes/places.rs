use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::error::AppError;
use crate::models::NewPlace;
use crate::AppState;

/// How many places the popular listing returns.
const POPULAR_LIMIT: i64 = 5;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/places", get(list_places).post(create_place))
        .route("/api/places/popular", get(popular_places))
        .route("/api/places/{id}", get(show_place))
        .route("/api/places/{id}/view", post(register_view))
}

async fn list_places(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let places = state.store.list_all().await?;
    Ok(Json(places))
}

async fn popular_places(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let places = state.store.list_top_by_views(POPULAR_LIMIT).await?;
    Ok(Json(places))
}

async fn show_place(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let Some(place) = state.store.get_with_reviews(id).await? else {
        return Err(AppError::NotFound);
    };

    Ok(Json(place))
}

async fn create_place(
    State(state): State<AppState>,
    payload: Result<Json<NewPlace>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(new) = payload?;

    let place = state.store.create_place(new).await?;
    tracing::info!("Created place {} ({})", place.id, place.name);

    Ok((StatusCode::CREATED, Json(place)))
}

async fn register_view(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    if !state.store.increment_views(id).await? {
        return Err(AppError::NotFound);
    }

    Ok(StatusCode::OK)
}
