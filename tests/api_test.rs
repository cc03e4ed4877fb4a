use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use shelfmark::infrastructure::AppState;
use shelfmark::{api, db};

// Helper to build a router over a fresh in-memory database
async fn test_app() -> Router {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    api::api_router(AppState::new(db))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

fn delete_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("body is not JSON")
}

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app().await;

    let response = app.oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn genre_detail_carries_canonical_url() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request("POST", "/genres", json!({ "name": "Fantasy" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = response_json(response).await;
    let id = created["id"].as_i64().expect("id");

    let response = app
        .oneshot(get_request(&format!("/genres/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["name"], "Fantasy");
    assert_eq!(body["url"], format!("/genres/{id}"));
}

#[tokio::test]
async fn duplicate_genre_returns_conflict() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request("POST", "/genres", json!({ "name": "Fantasy" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(json_request("POST", "/genres", json!({ "name": "fantasy" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = response_json(response).await;
    assert_eq!(body["error"], "Genre already exists (case insensitive match)");
}

#[tokio::test]
async fn unknown_book_returns_not_found() {
    let app = test_app().await;

    let response = app.oneshot(get_request("/books/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_json(response).await;
    assert_eq!(body["error"], "Resource not found");
}

#[tokio::test]
async fn oversized_isbn_is_a_bad_request() {
    let app = test_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/books",
            json!({
                "title": "Dune",
                "author": "Frank Herbert",
                "summary": "",
                "isbn": "97804410135930"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn deleting_a_book_with_instances_returns_conflict() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/books",
            json!({
                "title": "Dune",
                "author": "Frank Herbert",
                "summary": "",
                "isbn": "9780441013593"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let book = response_json(response).await;
    let book_id = book["id"].as_i64().expect("id");

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/instances",
            json!({ "book_id": book_id, "imprint": "Ace Books, 1990" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let instance = response_json(response).await;
    let instance_id = instance["id"].as_i64().expect("id");

    let response = app
        .clone()
        .oneshot(delete_request(&format!("/books/{book_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app
        .clone()
        .oneshot(delete_request(&format!("/instances/{instance_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(delete_request(&format!("/books/{book_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
