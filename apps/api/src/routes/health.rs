use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version and the size of the loaded corpus.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let index = state.pipeline.index();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "cheerup-api",
        "corpus_size": index.len(),
        "top_k": index.top_k()
    }))
}
