//! Error types for program synthesis

use std::path::PathBuf;

/// Result type alias for synthesis operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can abort a configuration write
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Persisting the generated program failed. No partial state is
    /// retained; the caller may simply rewrite.
    #[error("Failed to write configuration to {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a playlist manifest failed
    #[error("Failed to write playlist manifest {path}: {source}")]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A schedule carried a malformed time code or weekday
    #[error("Invalid schedule: {0}")]
    Schedule(#[from] pmoliq::Error),

    /// The external repository rejected a write
    #[error("Repository error: {0}")]
    Repository(#[from] anyhow::Error),
}
