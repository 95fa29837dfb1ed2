//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type for everything raised while
//! handling a request. It implements `IntoResponse`, so every failure path
//! renders the same JSON shape; a failing request can never take the process
//! down with it.

pub mod config;
pub mod storage;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::error::config::ConfigError;
use crate::model::api::ErrorBody;

#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or unusable configuration, discovered when a component first
    /// needs the value.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM, raised by mounted handler
    /// groups once they are past the readiness gate.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// The database connection could not be established for this request.
    ///
    /// Produced by the readiness gate; the connection cache retries on the
    /// next request, so this is a per-request outcome, not a terminal state.
    #[error("Database connection failed: {0}")]
    DatabaseUnavailable(String),

    /// Error raised by a handler group with an explicit HTTP status.
    ///
    /// The status is honored as-is and the message is passed through to the
    /// client in the uniform error body.
    #[error("{1}")]
    Status(StatusCode, String),
}

impl AppError {
    /// HTTP status this error renders with. Defaults to 500 unless the
    /// raiser attached an explicit status.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Status(status, _) => *status,
            Self::ConfigErr(_) | Self::DbErr(_) | Self::DatabaseUnavailable(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Renders any application error into the uniform
/// `{ success, message, timestamp }` body with the error's status.
///
/// Server-side failures are logged with their full message here, once, at
/// the outermost boundary.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{self}");
        }

        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}
