//! Process-wide single-flight cache for the database connection.
//!
//! Both deployment shapes funnel every request through one process-scoped
//! connection: a persistent server connects once at startup, while an
//! ephemeral host re-invokes a warm instance whose pool must survive between
//! invocations. The cache guarantees that at most one connection attempt is
//! in flight at a time, that concurrent callers share that attempt's outcome,
//! and that a failed attempt is retried by the next caller instead of being
//! cached forever.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tokio::sync::{watch, Mutex};

use crate::config::Config;
use crate::error::{config::ConfigError, AppError};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Establishes the underlying connection. Split behind a trait so tests can
/// observe how many attempts the cache actually makes.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self, uri: &str) -> Result<DatabaseConnection, DbErr>;
}

/// Production connector: pooled sea-orm connection with a bounded attempt, so
/// an unreachable database cannot pin a request pipeline indefinitely.
struct SeaOrmConnector;

#[async_trait]
impl Connector for SeaOrmConnector {
    async fn connect(&self, uri: &str) -> Result<DatabaseConnection, DbErr> {
        let mut opt = ConnectOptions::new(uri);
        opt.sqlx_logging(false).connect_timeout(CONNECT_TIMEOUT);

        Database::connect(opt).await
    }
}

/// Cloneable record of a failed attempt, shared with every waiter and kept
/// for diagnostics until the next retry.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ConnectError {
    message: String,
}

type AttemptResult = Result<DatabaseConnection, ConnectError>;

enum ConnState {
    /// No attempt has been made in this process yet.
    Disconnected,
    /// An attempt is in flight; the receiver resolves with its outcome.
    Connecting(watch::Receiver<Option<AttemptResult>>),
    /// Terminal for the process lifetime.
    Connected(DatabaseConnection),
    /// Last attempt failed; the next call starts a fresh attempt.
    Failed(ConnectError),
}

/// Connection state as reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Disconnected,
    Connecting,
    Connected,
    Failed,
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConnectionStatus::Disconnected => "disconnected",
            ConnectionStatus::Connecting => "connecting",
            ConnectionStatus::Connected => "connected",
            ConnectionStatus::Failed => "failed",
        })
    }
}

/// Shared handle to the per-process connection state. Clones are cheap and
/// all refer to the same state machine; the handle is owned by `AppState`
/// rather than living in module-level statics.
#[derive(Clone)]
pub struct ConnectionCache {
    inner: Arc<CacheInner>,
}

struct CacheInner {
    state: Mutex<ConnState>,
    connector: Arc<dyn Connector>,
}

impl ConnectionCache {
    pub fn new() -> Self {
        Self::with_connector(Arc::new(SeaOrmConnector))
    }

    pub fn with_connector(connector: Arc<dyn Connector>) -> Self {
        Self {
            inner: Arc::new(CacheInner {
                state: Mutex::new(ConnState::Disconnected),
                connector,
            }),
        }
    }

    /// Returns the pooled connection, establishing it on first use.
    ///
    /// Safe to call from any number of concurrent requests: the first caller
    /// to observe `Disconnected` (or a previous failure) claims the attempt,
    /// every other caller waits on the same outcome. Success is reused for
    /// the rest of the process lifetime; failure is surfaced to all current
    /// waiters and retried by the next call.
    ///
    /// A missing `DATABASE_URL` fails this call with a configuration error
    /// without touching the state machine.
    pub async fn ensure(&self, config: &Config) -> Result<DatabaseConnection, AppError> {
        let Some(uri) = config.database_url.clone() else {
            return Err(ConfigError::MissingEnvVar("DATABASE_URL".to_string()).into());
        };

        let mut rx = {
            let mut state = self.inner.state.lock().await;
            match &*state {
                ConnState::Connected(db) => return Ok(db.clone()),
                ConnState::Connecting(rx) => rx.clone(),
                ConnState::Disconnected | ConnState::Failed(_) => {
                    let (tx, rx) = watch::channel(None);
                    *state = ConnState::Connecting(rx.clone());
                    self.spawn_attempt(uri, tx);
                    rx
                }
            }
        };

        match rx.wait_for(|attempt| attempt.is_some()).await {
            Ok(attempt) => match attempt.as_ref() {
                Some(Ok(db)) => Ok(db.clone()),
                Some(Err(err)) => Err(AppError::DatabaseUnavailable(err.to_string())),
                None => Err(AppError::DatabaseUnavailable(
                    "connection attempt produced no outcome".to_string(),
                )),
            },
            Err(_) => Err(AppError::DatabaseUnavailable(
                "connection attempt was aborted".to_string(),
            )),
        }
    }

    pub async fn status(&self) -> ConnectionStatus {
        match &*self.inner.state.lock().await {
            ConnState::Disconnected => ConnectionStatus::Disconnected,
            ConnState::Connecting(_) => ConnectionStatus::Connecting,
            ConnState::Connected(_) => ConnectionStatus::Connected,
            ConnState::Failed(_) => ConnectionStatus::Failed,
        }
    }

    /// Runs the attempt on a detached task: cancelling the request that
    /// happened to claim the attempt must not orphan the waiters.
    fn spawn_attempt(&self, uri: String, tx: watch::Sender<Option<AttemptResult>>) {
        let inner = self.inner.clone();
        tokio::spawn(async move {
            tracing::info!("establishing database connection");

            let attempt = match inner.connector.connect(&uri).await {
                Ok(db) => {
                    tracing::info!("database connection established");
                    Ok(db)
                }
                Err(err) => {
                    tracing::error!("database connection failed: {err}");
                    Err(ConnectError {
                        message: err.to_string(),
                    })
                }
            };

            {
                let mut state = inner.state.lock().await;
                *state = match &attempt {
                    Ok(db) => ConnState::Connected(db.clone()),
                    Err(err) => ConnState::Failed(err.clone()),
                };
            }

            // Waiters may have gone away in the meantime; the state above
            // stays authoritative either way.
            let _ = tx.send(Some(attempt));
        });
    }
}

impl Default for ConnectionCache {
    fn default() -> Self {
        Self::new()
    }
}
