//! Global application error types and handlers.
//!
//! This module defines the error type returned by every API handler and maps
//! it onto a JSON body of the form `{"status": <code>, "message": <text>}`,
//! with the HTTP status matching the `status` field.

use adapters::AdapterError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::{auth::AuthError, config::ConfigError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad Request")]
    BadRequest,

    #[error("Malformed payload")]
    MalformedPayload,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Error in posting review")]
    ReviewRejected(#[source] AdapterError),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest | AppError::MalformedPayload => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::FORBIDDEN,
            AppError::ReviewRejected(_) => StatusCode::UNAUTHORIZED,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Auth(AuthError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Auth(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            AppError::Database(err) | AppError::Auth(AuthError::Database(err)) => {
                error!("Database error: {err}");
                "Internal Server Error".to_string()
            }
            AppError::ReviewRejected(err) => {
                error!("Error posting review: {err}");
                self.to_string()
            }
            _ => self.to_string(),
        };

        (
            status,
            Json(json!({ "status": status.as_u16(), "message": message })),
        )
            .into_response()
    }
}

/// Failures that stop the server from starting.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Database unavailable: {0}")]
    Database(#[from] DbErr),

    #[error("Upstream client setup failed: {0}")]
    Adapter(#[from] AdapterError),

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
