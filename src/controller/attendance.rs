//! Mount surface for the attendance-tracking collaborator.

use axum::{routing::get, Json, Router};

use crate::model::api::EndpointIndex;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}

async fn index() -> Json<EndpointIndex> {
    Json(EndpointIndex {
        success: true,
        group: "attendance".to_string(),
        endpoints: vec![
            "GET /api/attendance".to_string(),
            "POST /api/attendance/check-in".to_string(),
            "POST /api/attendance/check-out".to_string(),
            "GET /api/attendance/{customer_id}".to_string(),
        ],
    })
}
