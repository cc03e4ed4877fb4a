use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::error_response;
use crate::domain::{DomainError, Genre};
use crate::infrastructure::AppState;

#[derive(Deserialize)]
pub struct GenreRequest {
    name: String,
}

/// Detail view carrying the canonical URL for the genre.
#[derive(Serialize)]
struct GenreDetail {
    id: i32,
    name: String,
    url: String,
}

impl From<Genre> for GenreDetail {
    fn from(genre: Genre) -> Self {
        let url = genre.detail_path();
        Self {
            id: genre.id,
            name: genre.name,
            url,
        }
    }
}

pub async fn list_genres(State(state): State<AppState>) -> impl IntoResponse {
    match state.genre_repo.find_all().await {
        Ok(genres) => (StatusCode::OK, Json(genres)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_genre(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.genre_repo.find_by_id(id).await {
        Ok(Some(genre)) => (StatusCode::OK, Json(GenreDetail::from(genre))).into_response(),
        Ok(None) => error_response(DomainError::NotFound),
        Err(e) => error_response(e),
    }
}

pub async fn create_genre(
    State(state): State<AppState>,
    Json(payload): Json<GenreRequest>,
) -> impl IntoResponse {
    match state.genre_repo.create(payload.name).await {
        Ok(genre) => (StatusCode::CREATED, Json(genre)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn update_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<GenreRequest>,
) -> impl IntoResponse {
    match state.genre_repo.rename(id, payload.name).await {
        Ok(genre) => (StatusCode::OK, Json(genre)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_genre(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.genre_repo.delete(id).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "message": "Genre deleted" }))).into_response(),
        Err(e) => error_response(e),
    }
}
