//! Named storage areas under the resolved storage root.
//!
//! Creation is best-effort: ephemeral hosts may offer a writable scratch
//! directory while rejecting writes elsewhere, and the process must still
//! serve read-only and database-only endpoints. Each area is therefore
//! created independently, and a failure is logged and skipped rather than
//! propagated.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::storage::StorageError;

/// Logical storage areas the service relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageArea {
    /// Customer-facing file uploads, served back under `/uploads`.
    Uploads,
    /// Persisted messaging-channel session state.
    AuthState,
    /// Rotating application log files.
    Logs,
}

impl StorageArea {
    pub const ALL: [StorageArea; 3] = [
        StorageArea::Uploads,
        StorageArea::AuthState,
        StorageArea::Logs,
    ];

    pub fn dir_name(self) -> &'static str {
        match self {
            StorageArea::Uploads => "uploads",
            StorageArea::AuthState => "auth-state",
            StorageArea::Logs => "logs",
        }
    }

    /// Concrete directory of this area under the given storage root.
    pub fn path_under(self, root: &Path) -> PathBuf {
        root.join(self.dir_name())
    }
}

impl fmt::Display for StorageArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Creates a single storage area, including missing parents. Idempotent:
/// an already-existing directory is a no-op.
pub fn ensure_area(root: &Path, area: StorageArea) -> Result<(), StorageError> {
    let path = area.path_under(root);
    fs::create_dir_all(&path).map_err(|source| StorageError::CreateArea {
        area: area.dir_name(),
        path,
        source,
    })
}

/// Creates every storage area under the configured root, best-effort.
///
/// A failing area (read-only root, permission problem) is logged and skipped;
/// the remaining areas are still attempted and the caller always proceeds.
pub fn ensure_areas(config: &Config) {
    for area in StorageArea::ALL {
        match ensure_area(&config.storage_root, area) {
            Ok(()) => tracing::debug!("storage area ready: {area}"),
            Err(err) => tracing::warn!("{err}"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tempfile::tempdir;

    fn config_with_root(root: &Path) -> Config {
        Config {
            ephemeral: false,
            storage_root: root.to_path_buf(),
            port: 0,
            cors_origins: Vec::new(),
            database_url: None,
        }
    }

    #[test]
    fn creates_every_area() {
        let root = tempdir().expect("temp dir");
        ensure_areas(&config_with_root(root.path()));

        for area in StorageArea::ALL {
            assert!(
                area.path_under(root.path()).is_dir(),
                "{area} should exist"
            );
        }
    }

    /// Re-running with already-existing directories produces no errors and
    /// leaves the same directory set present.
    #[test]
    fn reruns_are_noops() {
        let root = tempdir().expect("temp dir");

        for _ in 0..2 {
            for area in StorageArea::ALL {
                ensure_area(root.path(), area).expect("area creation is idempotent");
            }
        }

        for area in StorageArea::ALL {
            assert!(area.path_under(root.path()).is_dir());
        }
    }

    /// A root that cannot hold directories yields an explicit per-area error,
    /// and the best-effort pass swallows it without panicking.
    #[test]
    fn failure_is_reported_per_area_and_contained() {
        let dir = tempdir().expect("temp dir");
        let file_as_root = dir.path().join("occupied");
        fs::write(&file_as_root, b"not a directory").expect("write file");

        let err = ensure_area(&file_as_root, StorageArea::Uploads)
            .expect_err("creating under a file must fail");
        assert!(matches!(err, StorageError::CreateArea { area: "uploads", .. }));

        ensure_areas(&config_with_root(&file_as_root));
    }
}
