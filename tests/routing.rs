//! Route-composition contracts: canonical mounts before the legacy alias,
//! first-registered-wins inside the alias, and the mode-dependent uploads
//! mount.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use attendly::config::Config;
use attendly::router;
use attendly::state::AppState;

fn build_app(root: &std::path::Path, ephemeral: bool) -> Router {
    let config = Config {
        ephemeral,
        storage_root: root.to_path_buf(),
        port: 0,
        cors_origins: Vec::new(),
        database_url: Some("sqlite::memory:".to_string()),
    };
    router::compose(AppState::new(config))
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

async fn decode_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    let json = serde_json::from_slice(&bytes).expect("json body");
    (status, json)
}

/// `/api/whatsapp/status` must hit the canonical mount even though the
/// legacy `/api` alias is also registered.
#[tokio::test]
async fn canonical_mount_wins_over_the_legacy_alias() {
    let root = tempfile::tempdir().expect("temp dir");
    let app = build_app(root.path(), true);

    let (status, json) = decode_json(
        app.oneshot(get_request("/api/whatsapp/status"))
            .await
            .expect("response"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json.get("channel").and_then(Value::as_str),
        Some("whatsapp")
    );
    // Fresh storage root: no persisted session yet.
    assert_eq!(json.get("linked").and_then(Value::as_bool), Some(false));
}

/// Conflicting sub-paths inside the alias resolve to the first registered
/// group (customers, then attendance, then reports).
#[tokio::test]
async fn legacy_alias_serves_the_first_registered_group() {
    let root = tempfile::tempdir().expect("temp dir");
    let app = build_app(root.path(), true);

    let (status, json) =
        decode_json(app.oneshot(get_request("/api")).await.expect("response")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json.get("group").and_then(Value::as_str),
        Some("customers")
    );
}

/// The messaging channel is canonical-only: its sub-paths are not re-exposed
/// under the bare `/api` prefix.
#[tokio::test]
async fn whatsapp_is_not_aliased_under_bare_api() {
    let root = tempfile::tempdir().expect("temp dir");
    let app = build_app(root.path(), true);

    let (status, json) =
        decode_json(app.oneshot(get_request("/api/status")).await.expect("response")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json.get("success").and_then(Value::as_bool), Some(false));
}

#[tokio::test]
async fn uploads_are_served_in_persistent_mode() {
    let root = tempfile::tempdir().expect("temp dir");
    let uploads = root.path().join("uploads");
    std::fs::create_dir_all(&uploads).expect("uploads dir");
    std::fs::write(uploads.join("hello.txt"), b"hello").expect("upload file");

    let app = build_app(root.path(), false);
    let response = app
        .oneshot(get_request("/uploads/hello.txt"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    assert_eq!(&bytes[..], b"hello");
}

/// Ephemeral hosts do not get the static mount; those paths fall through to
/// the structured 404 instead of exposing scratch-space files.
#[tokio::test]
async fn uploads_are_disabled_in_ephemeral_mode() {
    let root = tempfile::tempdir().expect("temp dir");
    let uploads = root.path().join("uploads");
    std::fs::create_dir_all(&uploads).expect("uploads dir");
    std::fs::write(uploads.join("hello.txt"), b"hello").expect("upload file");

    let app = build_app(root.path(), true);
    let (status, json) = decode_json(
        app.oneshot(get_request("/uploads/hello.txt"))
            .await
            .expect("response"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json.get("success").and_then(Value::as_bool), Some(false));
}
