//! Mount surface for the reporting collaborator.

use axum::{routing::get, Json, Router};

use crate::model::api::EndpointIndex;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}

async fn index() -> Json<EndpointIndex> {
    Json(EndpointIndex {
        success: true,
        group: "reports".to_string(),
        endpoints: vec![
            "GET /api/reports/daily".to_string(),
            "GET /api/reports/monthly".to_string(),
            "GET /api/reports/export".to_string(),
        ],
    })
}
