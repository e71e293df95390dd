use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dash_core::{DomainError, FieldErrors};
use thiserror::Error;

use crate::response::ApiResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(errors) => ApiError::Validation(errors),
            DomainError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            DomainError::FlagStoreError(msg) | DomainError::InternalError(msg) => {
                ApiError::InternalError(msg)
            }
        }
    }
}

impl From<handlebars::RenderError> for ApiError {
    fn from(err: handlebars::RenderError) -> Self {
        ApiError::RenderError(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Unauthorized(msg) => {
                tracing::warn!("Unauthorized: {}", msg);
                (StatusCode::UNAUTHORIZED, ApiResponse::<()>::error("UNAUTHORIZED", &msg))
            }
            ApiError::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, ApiResponse::error("NOT_FOUND", &msg))
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, ApiResponse::error("BAD_REQUEST", &msg))
            }
            ApiError::Validation(errors) => {
                tracing::debug!("Validation failed: {}", errors);
                (StatusCode::UNPROCESSABLE_ENTITY, ApiResponse::validation(errors))
            }
            ApiError::RenderError(msg) => {
                tracing::error!("Render error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, ApiResponse::error("RENDER_ERROR", &msg))
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, ApiResponse::error("INTERNAL_ERROR", &msg))
            }
        };

        (status, Json(body)).into_response()
    }
}
