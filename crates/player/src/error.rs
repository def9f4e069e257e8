//! Error types for the trace player.

#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    #[error("Malformed trace payload: {0}")]
    Ingestion(#[from] serde_json::Error),

    #[error("Trace contains no steps")]
    EmptyTrace,

    #[error("Failed to read trace artifact: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "cli")]
    #[error("CLI error: {0}")]
    Cli(String),
}
