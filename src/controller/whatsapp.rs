//! Mount surface for the WhatsApp messaging channel.
//!
//! The channel client (session lifecycle, QR pairing, message sending) is an
//! external collaborator; what lives here is the mountable group plus the
//! status endpoint, which only inspects what the client has persisted under
//! the `auth-state` storage area.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::model::api::EndpointIndex;
use crate::state::AppState;
use crate::storage::StorageArea;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/status", get(status))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChannelStatusBody {
    success: bool,
    channel: &'static str,
    /// Whether a persisted session exists in the auth-state area.
    linked: bool,
}

async fn index() -> Json<EndpointIndex> {
    Json(EndpointIndex {
        success: true,
        group: "whatsapp".to_string(),
        endpoints: vec![
            "GET /api/whatsapp/status".to_string(),
            "GET /api/whatsapp/qr".to_string(),
            "POST /api/whatsapp/send".to_string(),
        ],
    })
}

/// Reports whether a linked messaging session is present on disk. An
/// unreadable or missing auth-state area reads as not linked rather than an
/// error, since ephemeral hosts may never have had the area created.
async fn status(State(state): State<AppState>) -> Json<ChannelStatusBody> {
    let auth_dir = StorageArea::AuthState.path_under(&state.config.storage_root);
    let linked = std::fs::read_dir(&auth_dir)
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false);

    Json(ChannelStatusBody {
        success: true,
        channel: "whatsapp",
        linked,
    })
}
