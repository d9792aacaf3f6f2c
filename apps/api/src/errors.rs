use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// Every model in the fallback chain failed.
    #[error("AI models unavailable")]
    AiUnavailable,

    #[error("Template error: {0}")]
    Render(#[from] tera::Error),

    #[error("Bundle error: {0}")]
    Bundle(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::AiUnavailable => {
                tracing::warn!("All models in the fallback chain failed");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "AI_BUSY",
                    "AI models busy. Please try again shortly.".to_string(),
                )
            }
            AppError::Render(e) => {
                tracing::error!("Template error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RENDER_ERROR",
                    "The portfolio page could not be rendered".to_string(),
                )
            }
            AppError::Bundle(msg) => {
                tracing::error!("Bundle error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "BUNDLE_ERROR",
                    "The download archive could not be created".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 4096)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_is_bad_request_with_message() {
        let response = AppError::Validation("No file".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["message"], "No file");
    }

    #[tokio::test]
    async fn test_ai_unavailable_is_service_unavailable() {
        let response = AppError::AiUnavailable.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "AI_BUSY");
    }

    #[tokio::test]
    async fn test_internal_error_message_is_redacted() {
        let err = anyhow::anyhow!("xref table at offset 1234 is corrupt");
        let response = AppError::Internal(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        let message = json["error"]["message"].as_str().unwrap();
        assert!(!message.contains("xref"));
    }
}
