//! Application state shared across all request handlers.
//!
//! The state is built once at startup and then cloned for each request
//! handler through Axum's state extraction. Both fields are cheap to clone:
//! the configuration is reference-counted and the connection cache is a
//! shared handle onto one per-process state machine.

use std::sync::Arc;

use crate::config::Config;
use crate::connection::ConnectionCache;

#[derive(Clone)]
pub struct AppState {
    /// Immutable execution context resolved at process start.
    pub config: Arc<Config>,

    /// Process-wide single-flight cache guarding the database connection.
    pub connections: ConnectionCache,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            connections: ConnectionCache::new(),
        }
    }
}
