//! Application error types and HTTP response mapping.
//!
//! Defines `AppError` enum for all error conditions and implements Axum's
//! `IntoResponse` to automatically convert errors to appropriate HTTP responses
//! with JSON error bodies.
//!
//! Error mappings:
//! - `UserNotFound` → 404
//! - `InvalidImage` → 400
//! - `Http`, `UpstreamStatus` → 502
//! - `Decode`, `Render`, `Internal` → 500
//!
//! The `/fetch` handler never lets the upstream variants reach this mapping:
//! it folds them into the "user not found" form instead (see `is_lookup_failure`).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("GitHub request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub returned HTTP {0}")]
    UpstreamStatus(u16),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Malformed GraphQL response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Heatmap rendering failed: {0}")]
    Render(String),

    #[error("Invalid heatmap data: {0}")]
    InvalidImage(#[from] base64::DecodeError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// True for every failure the user sees as "user not found".
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            AppError::Http(_) | AppError::UpstreamStatus(_) | AppError::UserNotFound(_)
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::UserNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidImage(_) => StatusCode::BAD_REQUEST,
            AppError::Http(_) | AppError::UpstreamStatus(_) => StatusCode::BAD_GATEWAY,
            AppError::Decode(_) | AppError::Render(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_failures_fold_into_lookup_failure() {
        assert!(AppError::UpstreamStatus(403).is_lookup_failure());
        assert!(AppError::UserNotFound("ghost".into()).is_lookup_failure());
        assert!(!AppError::Render("boom".into()).is_lookup_failure());
        assert!(!AppError::Internal("boom".into()).is_lookup_failure());
    }

    #[test]
    fn invalid_image_maps_to_bad_request() {
        use base64::Engine as _;
        let err = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode("%%%")
            .unwrap_err();
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_status_maps_to_bad_gateway() {
        let response = AppError::UpstreamStatus(500).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
