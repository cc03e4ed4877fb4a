use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::infrastructure::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let database = match state.db().ping().await {
        Ok(()) => "ok",
        Err(_) => "unreachable",
    };

    Json(json!({
        "status": "ok",
        "service": "shelfmark",
        "version": env!("CARGO_PKG_VERSION"),
        "database": database,
    }))
}
