use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and store reachability.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let store = match state.store.keys() {
        Ok(keys) => json!({ "ok": true, "keys": keys.len() }),
        Err(e) => {
            tracing::warn!("Store health check failed: {e}");
            json!({ "ok": false })
        }
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "readiness-api",
        "store": store,
        "persistent": state.config.data_dir.is_some()
    }))
}
