pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::archetype;
use crate::portfolio::handlers;
use crate::state::AppState;

pub const ANALYZE_PATH: &str = "/api/v1/portfolio/analyze";
pub const GENERATE_PATH: &str = "/api/v1/portfolio/generate";
pub const DOWNLOAD_PATH: &str = "/api/v1/portfolio/download";
pub const ARCHETYPE_PATH: &str = "/api/v1/archetype/generate";

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(handlers::handle_index))
        // Portfolio variant
        .route(ANALYZE_PATH, post(handlers::handle_analyze).layer(upload_limit.clone()))
        .route(GENERATE_PATH, post(handlers::handle_generate))
        .route(DOWNLOAD_PATH, post(handlers::handle_download).layer(upload_limit))
        // Archetype variant
        .route(ARCHETYPE_PATH, post(archetype::handlers::handle_generate))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::llm_client::fake::ScriptedGenerator;
    use crate::portfolio::extract::fake::FixedPages;

    #[tokio::test]
    async fn test_health_endpoint() {
        let state = AppState::for_tests(
            ScriptedGenerator::always_busy(),
            ScriptedGenerator::always_busy(),
            Arc::new(FixedPages(Vec::new())),
        );

        let response = build_router(state)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "folio-api");
        assert_eq!(json["models"]["portfolio"].as_array().unwrap().len(), 4);
        assert_eq!(json["models"]["archetype"][0], "gemini-2.5-flash");
    }
}
