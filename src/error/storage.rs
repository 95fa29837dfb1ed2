use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    /// Creating a storage area directory failed.
    ///
    /// Expected on hosts with a read-only filesystem; the startup path logs
    /// the failure and continues with the remaining areas, and requests are
    /// never shown this error.
    #[error("Failed to create storage area '{area}' at {}: {source}", .path.display())]
    CreateArea {
        /// Logical name of the area that could not be created
        area: &'static str,
        /// Concrete directory that was attempted
        path: PathBuf,
        /// The underlying filesystem error
        #[source]
        source: io::Error,
    },
}
