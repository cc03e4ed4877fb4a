use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use super::error_response;
use crate::domain::DomainError;
use crate::infrastructure::AppState;

#[derive(Deserialize)]
pub struct LanguageRequest {
    name: String,
}

pub async fn list_languages(State(state): State<AppState>) -> impl IntoResponse {
    match state.language_repo.find_all().await {
        Ok(languages) => (StatusCode::OK, Json(languages)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_language(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.language_repo.find_by_id(id).await {
        Ok(Some(language)) => (StatusCode::OK, Json(language)).into_response(),
        Ok(None) => error_response(DomainError::NotFound),
        Err(e) => error_response(e),
    }
}

pub async fn create_language(
    State(state): State<AppState>,
    Json(payload): Json<LanguageRequest>,
) -> impl IntoResponse {
    match state.language_repo.create(payload.name).await {
        Ok(language) => (StatusCode::CREATED, Json(language)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn update_language(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<LanguageRequest>,
) -> impl IntoResponse {
    match state.language_repo.rename(id, payload.name).await {
        Ok(language) => (StatusCode::OK, Json(language)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_language(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match state.language_repo.delete(id).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "message": "Language deleted" }))).into_response(),
        Err(e) => error_response(e),
    }
}
