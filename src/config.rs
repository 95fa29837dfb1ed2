use std::env;
use std::path::{Path, PathBuf};

/// Directory used for storage when the process is persistent and no override
/// is configured, relative to the application root.
const DEFAULT_STORAGE_DIR: &str = "storage";

/// Directory used for storage under the host's temporary area when the
/// process is ephemeral.
const TEMP_STORAGE_DIR: &str = "attendly";

const DEFAULT_PORT: u16 = 5000;

/// Immutable execution context, resolved once at process start and shared by
/// every component.
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether the host invokes the process per request (recycled instances,
    /// disposable filesystem) rather than keeping it resident.
    pub ephemeral: bool,

    /// Absolute root under which all storage areas live.
    pub storage_root: PathBuf,

    /// Listen port for persistent mode.
    pub port: u16,

    /// Origins allowed by the CORS policy.
    pub cors_origins: Vec<String>,

    /// Database connection string. Deliberately optional: its absence is
    /// reported by the connection cache when a connection is first attempted,
    /// so resolution itself never fails.
    pub database_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolves the execution context from a key/value lookup.
    ///
    /// Pure given its inputs; `from_env` passes the process environment.
    /// Recognized keys: `SERVERLESS`, `STORAGE_ROOT`, `PORT`, `CORS_ORIGINS`,
    /// `DATABASE_URL`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let ephemeral = lookup("SERVERLESS")
            .map(|value| is_truthy(&value))
            .unwrap_or(false);

        let storage_root = resolve_storage_root(lookup("STORAGE_ROOT").as_deref(), ephemeral);

        let port = lookup("PORT")
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|value| {
                value
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_cors_origins);

        let database_url = lookup("DATABASE_URL").filter(|value| !value.is_empty());

        Self {
            ephemeral,
            storage_root,
            port,
            cors_origins,
            database_url,
        }
    }
}

/// Storage-root priority: an explicit override wins verbatim, then ephemeral
/// processes land under the host's temporary area, then a fixed directory
/// next to the application.
fn resolve_storage_root(explicit: Option<&str>, ephemeral: bool) -> PathBuf {
    if let Some(path) = explicit {
        return absolutize(Path::new(path));
    }

    if ephemeral {
        return env::temp_dir().join(TEMP_STORAGE_DIR);
    }

    app_root().join(DEFAULT_STORAGE_DIR)
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://localhost:5173".to_string(),
    ]
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

fn app_root() -> PathBuf {
    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        app_root().join(path)
    }
}
