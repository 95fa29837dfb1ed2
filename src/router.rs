//! Route composition and the ordered request pipeline.
//!
//! The pipeline, outermost first: panic boundary, CORS, body-size ceiling,
//! access log, then routing. The database-readiness gate wraps only the
//! `/api` subtree, so the diagnostic endpoints keep answering while the
//! database is down.
//!
//! Mount order is a contract: canonical prefixes are matched first, and the
//! legacy `/api` alias only runs as the fallback chain, so a canonical path
//! can never be shadowed by the alias.

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{from_fn, from_fn_with_state},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
};

use crate::config::Config;
use crate::controller::{attendance, core, customers, reports, whatsapp};
use crate::middleware::{logging, readiness};
use crate::model::api::ErrorBody;
use crate::state::AppState;
use crate::storage::StorageArea;

/// Request bodies beyond this are rejected before any handler runs.
const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Builds the complete application: route table plus pipeline.
///
/// The returned router is a plain tower `Service`; a persistent process
/// serves it from its own listener, while hosts that own the listener call
/// it once per invocation.
pub fn compose(state: AppState) -> Router {
    let config = state.config.clone();

    // Legacy alias kept for older clients: an /api path that no canonical
    // mount claimed falls through the groups in registration order, first
    // match wins.
    let legacy = {
        let reports = reports::routes()
            .fallback(core::not_found)
            .with_state(state.clone());
        let attendance = attendance::routes()
            .fallback_service(reports)
            .with_state(state.clone());
        customers::routes()
            .fallback_service(attendance)
            .with_state(state.clone())
    };

    let api = Router::new()
        .nest("/whatsapp", whatsapp::routes())
        .nest("/customers", customers::routes())
        .nest("/attendance", attendance::routes())
        .nest("/reports", reports::routes())
        .with_state(state.clone())
        .fallback_service(legacy)
        .layer(from_fn_with_state(
            state.clone(),
            readiness::require_database,
        ));

    let mut app = Router::new()
        .route("/", get(core::banner))
        .route("/health", get(core::health))
        .route("/test-whatsapp", get(core::whatsapp_endpoints))
        .nest_service("/api", api);

    // Uploads are only served by resident processes; on ephemeral hosts the
    // area lives in disposable scratch space and the paths fall through to
    // the structured 404.
    if !config.ephemeral {
        let uploads = StorageArea::Uploads.path_under(&config.storage_root);
        app = app.nest_service("/uploads", ServeDir::new(uploads));
    }

    app.fallback(core::not_found)
        .layer(from_fn(logging::access_log))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors(&config))
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}

fn cors(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("ignoring invalid CORS origin: {origin}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

/// Outermost boundary: a panicking handler still answers in the uniform
/// error shape instead of tearing down its connection.
fn panic_response(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "request handler panicked".to_string()
    };
    tracing::error!("panic while handling request: {detail}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::new("Internal server error")),
    )
        .into_response()
}
