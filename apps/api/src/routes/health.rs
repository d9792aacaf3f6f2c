use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version and the configured model chains.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "folio-api",
        "models": {
            "portfolio": state.portfolio_llm.models(),
            "archetype": state.archetype_llm.models(),
        }
    }))
}
