use crate::error::AppError;
use crate::state::AppState;
use crate::storage;

/// One-time process preparation shared by both execution modes: storage
/// areas first (best-effort), then the eager connection attempt.
///
/// A persistent process fails fast on a dead database, since no traffic can
/// be served without it. On an ephemeral host the failure is only logged:
/// the host owns the process lifecycle, and the per-request readiness gate
/// carries the connectivity guarantee from here on.
pub async fn prepare(state: &AppState) -> Result<(), AppError> {
    storage::ensure_areas(&state.config);

    if state.config.ephemeral {
        if let Err(err) = state.connections.ensure(&state.config).await {
            tracing::warn!("cold-start connection attempt failed: {err}");
        }
        return Ok(());
    }

    state.connections.ensure(&state.config).await?;
    Ok(())
}
