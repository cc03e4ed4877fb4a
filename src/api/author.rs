use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use super::error_response;
use crate::domain::{CreateAuthorInput, DomainError, UpdateAuthorInput};
use crate::infrastructure::AppState;

pub async fn list_authors(State(state): State<AppState>) -> impl IntoResponse {
    match state.author_repo.find_all().await {
        Ok(authors) => (StatusCode::OK, Json(authors)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_author(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.author_repo.find_by_id(id).await {
        Ok(Some(author)) => (StatusCode::OK, Json(author)).into_response(),
        Ok(None) => error_response(DomainError::NotFound),
        Err(e) => error_response(e),
    }
}

pub async fn create_author(
    State(state): State<AppState>,
    Json(payload): Json<CreateAuthorInput>,
) -> impl IntoResponse {
    match state.author_repo.create(payload).await {
        Ok(author) => (StatusCode::CREATED, Json(author)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn update_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAuthorInput>,
) -> impl IntoResponse {
    match state.author_repo.update(id, payload).await {
        Ok(author) => (StatusCode::OK, Json(author)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match state.author_repo.delete(id).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "message": "Author deleted" }))).into_response(),
        Err(e) => error_response(e),
    }
}
