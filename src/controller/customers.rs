//! Mount surface for the customer-records collaborator.

use axum::{routing::get, Json, Router};

use crate::model::api::EndpointIndex;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}

/// Operations available once the customer module is mounted here.
async fn index() -> Json<EndpointIndex> {
    Json(EndpointIndex {
        success: true,
        group: "customers".to_string(),
        endpoints: vec![
            "GET /api/customers".to_string(),
            "POST /api/customers".to_string(),
            "GET /api/customers/{id}".to_string(),
            "PUT /api/customers/{id}".to_string(),
            "DELETE /api/customers/{id}".to_string(),
        ],
    })
}
