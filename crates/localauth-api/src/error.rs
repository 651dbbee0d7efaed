use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use localauth_security::SigningError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Session layer is not installed on this route")]
    SessionMissing,

    #[error("Invalid session configuration: {0}")]
    Signing(#[from] SigningError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::Unauthorized => {
                tracing::debug!("Rejected unauthenticated request");
                (StatusCode::UNAUTHORIZED, "Unauthorized", "Unauthorized".to_string())
            }
            ApiError::SessionMissing => {
                tracing::error!("Session extractor used outside the session layer");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalError",
                    "Session unavailable".to_string(),
                )
            }
            ApiError::Signing(e) => {
                tracing::error!("Signing error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError", e.to_string())
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}
