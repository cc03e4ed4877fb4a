use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use super::error_response;
use crate::domain::{CreateBookInstanceInput, DomainError, UpdateBookInstanceInput};
use crate::infrastructure::AppState;

pub async fn list_instances(State(state): State<AppState>) -> impl IntoResponse {
    match state.instance_repo.find_all().await {
        Ok(instances) => (StatusCode::OK, Json(instances)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_instance(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.instance_repo.find_by_id(id).await {
        Ok(Some(instance)) => (StatusCode::OK, Json(instance)).into_response(),
        Ok(None) => error_response(DomainError::NotFound),
        Err(e) => error_response(e),
    }
}

pub async fn get_book_instances(
    State(state): State<AppState>,
    Path(book_id): Path<i32>,
) -> impl IntoResponse {
    match state.instance_repo.find_by_book_id(book_id).await {
        Ok(instances) => (StatusCode::OK, Json(instances)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn create_instance(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookInstanceInput>,
) -> impl IntoResponse {
    match state.instance_repo.create(payload).await {
        Ok(instance) => (StatusCode::CREATED, Json(instance)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn update_instance(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBookInstanceInput>,
) -> impl IntoResponse {
    match state.instance_repo.update(id, payload).await {
        Ok(instance) => (StatusCode::OK, Json(instance)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_instance(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match state.instance_repo.delete(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Book instance deleted" })),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
