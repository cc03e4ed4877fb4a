use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use super::error_response;
use crate::domain::{BookFilter, CreateBookInput, DomainError, UpdateBookInput};
use crate::infrastructure::AppState;

pub async fn list_books(
    State(state): State<AppState>,
    Query(filter): Query<BookFilter>,
) -> impl IntoResponse {
    match state.book_repo.find_all(filter).await {
        Ok(books) => (StatusCode::OK, Json(books)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_book(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.book_repo.find_by_id(id).await {
        Ok(Some(book)) => (StatusCode::OK, Json(book)).into_response(),
        Ok(None) => error_response(DomainError::NotFound),
        Err(e) => error_response(e),
    }
}

pub async fn create_book(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookInput>,
) -> impl IntoResponse {
    match state.book_repo.create(payload).await {
        Ok(book) => (StatusCode::CREATED, Json(book)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBookInput>,
) -> impl IntoResponse {
    match state.book_repo.update(id, payload).await {
        Ok(book) => (StatusCode::OK, Json(book)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_book(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.book_repo.delete(id).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "message": "Book deleted" }))).into_response(),
        Err(e) => error_response(e),
    }
}
