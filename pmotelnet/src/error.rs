//! Error types for the control protocol client

/// Result type alias for control protocol operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the engine's control port
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The control socket could not be opened within the timeout. Always
    /// surfaced; never swallowed.
    #[error("Could not connect to the control port {port}: {source}")]
    ConnectionFailure {
        port: u16,
        #[source]
        source: std::io::Error,
    },

    /// Socket I/O failed after the connection was established
    #[error("Control socket I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A manual request was pushed while another one is still pending
    #[error("A request is already pending in the queue")]
    QueueConflict,

    /// The external repository rejected a write
    #[error("Repository error: {0}")]
    Repository(#[from] anyhow::Error),
}
