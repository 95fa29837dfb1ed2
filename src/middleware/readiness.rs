use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Database-readiness gate for the API subtree.
///
/// Every `/api` route, canonical or legacy, passes through here before
/// dispatch, so handler groups can assume a live connection. On failure the
/// request is answered immediately; the connection cache retries on the next
/// request, and the process keeps serving.
pub async fn require_database(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    match state.connections.ensure(&state.config).await {
        Ok(_) => next.run(req).await,
        Err(err) => {
            let err = match err {
                AppError::DatabaseUnavailable(_) => err,
                other => AppError::DatabaseUnavailable(other.to_string()),
            };
            err.into_response()
        }
    }
}
