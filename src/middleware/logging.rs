use axum::{extract::Request, middleware::Next, response::Response};

/// Access log: method and path for every inbound request.
///
/// Purely observational; control flow always continues into the next stage.
pub async fn access_log(req: Request, next: Next) -> Response {
    tracing::info!("{} {}", req.method(), req.uri().path());
    next.run(req).await
}
