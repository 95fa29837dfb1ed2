//! Wire-format bodies for the core endpoints.
//!
//! Field names follow the JSON conventions of the existing clients
//! (camelCase, `success` flag on every non-2xx body).

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Uniform error body produced for every failed request.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    /// RFC 3339 timestamp of when the error was rendered.
    pub timestamp: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// 404 body pointing the caller at the mounted route prefixes.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotFoundBody {
    pub success: bool,
    pub message: String,
    pub available_routes: Vec<String>,
}

/// `GET /health` body.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthBody {
    pub status: String,
    pub timestamp: String,
    pub environment: EnvironmentFlags,
    /// Current connection-cache state (`disconnected`, `connecting`,
    /// `connected` or `failed`).
    pub database: String,
}

/// Resolved execution context, as reported by the health endpoint.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentFlags {
    pub ephemeral: bool,
    pub storage_root: String,
}

/// `GET /` service banner.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerBody {
    pub success: bool,
    pub message: String,
    pub routes: Vec<String>,
}

/// Static enumeration of a handler group's endpoints, served by the
/// diagnostic index routes.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointIndex {
    pub success: bool,
    pub group: String,
    pub endpoints: Vec<String>,
}
