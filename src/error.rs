use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Every handler failure maps to exactly one of these variants; raw store
/// or crypto errors never reach a response body. All unauthorized
/// sub-causes (unknown email, wrong password, bad or expired token) share
/// one opaque variant so clients cannot tell which check failed.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("invalid credentials")]
    Unauthorized,
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "invalid credentials".to_string())
            }
            ApiError::NotFound(what) => (StatusCode::NOT_FOUND, format!("{what} not found")),
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(err: ApiError) -> (StatusCode, serde_json::Value) {
        let res = err.into_response();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), 1024).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn validation_maps_to_400_with_message() {
        let (status, body) = body_of(ApiError::Validation("name is required".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "name is required");
    }

    #[tokio::test]
    async fn unauthorized_body_is_always_the_same() {
        // Enumeration resistance: one opaque body regardless of sub-cause.
        let (s1, b1) = body_of(ApiError::Unauthorized).await;
        let (s2, b2) = body_of(ApiError::Unauthorized).await;
        assert_eq!(s1, StatusCode::UNAUTHORIZED);
        assert_eq!((s1, b1), (s2, b2));
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let (status, body) = body_of(ApiError::NotFound("user")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "user not found");
    }

    #[tokio::test]
    async fn internal_hides_the_cause() {
        let (status, body) =
            body_of(ApiError::Internal(anyhow::anyhow!("pool timed out"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "internal server error");
    }
}
