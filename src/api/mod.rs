pub mod author;
pub mod book_instance;
pub mod books;
pub mod genre;
pub mod health;
pub mod language;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::domain::DomainError;
use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Genres
        .route("/genres", get(genre::list_genres).post(genre::create_genre))
        .route(
            "/genres/:id",
            get(genre::get_genre)
                .put(genre::update_genre)
                .delete(genre::delete_genre),
        )
        // Languages
        .route(
            "/languages",
            get(language::list_languages).post(language::create_language),
        )
        .route(
            "/languages/:id",
            get(language::get_language)
                .put(language::update_language)
                .delete(language::delete_language),
        )
        // Authors
        .route(
            "/authors",
            get(author::list_authors).post(author::create_author),
        )
        .route(
            "/authors/:id",
            get(author::get_author)
                .put(author::update_author)
                .delete(author::delete_author),
        )
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .route(
            "/books/:id/instances",
            get(book_instance::get_book_instances),
        )
        // Book instances
        .route(
            "/instances",
            get(book_instance::list_instances).post(book_instance::create_instance),
        )
        .route(
            "/instances/:id",
            get(book_instance::get_instance)
                .put(book_instance::update_instance)
                .delete(book_instance::delete_instance),
        )
        .with_state(state)
}

/// Maps domain failures onto the JSON error envelope.
pub(crate) fn error_response(err: DomainError) -> Response {
    let status = match &err {
        DomainError::NotFound => StatusCode::NOT_FOUND,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(json!({ "error": err.to_string() }))).into_response()
}
