//! Diagnostic endpoints served without the database: banner, health,
//! messaging-channel enumeration, and the structured not-found fallback.

use axum::{
    extract::{OriginalUri, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use crate::model::api::{BannerBody, EndpointIndex, EnvironmentFlags, HealthBody, NotFoundBody};
use crate::state::AppState;

/// Top-level prefixes advertised by the banner and the not-found fallback.
pub const TOP_LEVEL_ROUTES: [&str; 8] = [
    "/",
    "/health",
    "/test-whatsapp",
    "/api/whatsapp",
    "/api/customers",
    "/api/attendance",
    "/api/reports",
    "/uploads",
];

fn route_list() -> Vec<String> {
    TOP_LEVEL_ROUTES.iter().map(|route| route.to_string()).collect()
}

/// Service banner with the mounted route prefixes.
pub async fn banner() -> Json<BannerBody> {
    Json(BannerBody {
        success: true,
        message: "attendly API".to_string(),
        routes: route_list(),
    })
}

/// Liveness report: resolved environment, storage root and connection-cache
/// state. Never touches the database, so it answers even before the first
/// connection attempt and while the database is down.
pub async fn health(State(state): State<AppState>) -> Json<HealthBody> {
    Json(HealthBody {
        status: "OK".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        environment: EnvironmentFlags {
            ephemeral: state.config.ephemeral,
            storage_root: state.config.storage_root.display().to_string(),
        },
        database: state.connections.status().await.to_string(),
    })
}

/// Static enumeration of the messaging-channel endpoints, kept around for
/// quick smoke checks from a browser.
pub async fn whatsapp_endpoints() -> Json<EndpointIndex> {
    Json(EndpointIndex {
        success: true,
        group: "whatsapp".to_string(),
        endpoints: vec![
            "GET /api/whatsapp/".to_string(),
            "GET /api/whatsapp/status".to_string(),
            "GET /api/whatsapp/qr".to_string(),
            "POST /api/whatsapp/send".to_string(),
        ],
    })
}

/// Fallback for unmatched paths, with enough guidance to find the API.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> (StatusCode, Json<NotFoundBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundBody {
            success: false,
            message: format!("Route {} not found", uri.path()),
            available_routes: route_list(),
        }),
    )
}
