//! Ingestion boundary: producer payload -> validated step sequence.
//!
//! The producer hands over one JSON array of snapshots. Rejection happens
//! here, wholesale: a payload that is not an array, contains a malformed
//! element, or is empty never reaches a [`crate::player::TracePlayer`].

use std::path::Path;

use tracing::debug;

use crate::error::TraceError;
use crate::types::TraceStep;

/// Parse a producer payload into a non-empty step sequence.
pub fn parse_trace(payload: &str) -> Result<Vec<TraceStep>, TraceError> {
    let steps: Vec<TraceStep> = serde_json::from_str(payload)?;
    if steps.is_empty() {
        return Err(TraceError::EmptyTrace);
    }
    debug!(steps = steps.len(), "trace payload ingested");
    Ok(steps)
}

/// Read and parse a trace artifact from disk.
pub fn load_trace(path: impl AsRef<Path>) -> Result<Vec<TraceStep>, TraceError> {
    let payload = std::fs::read_to_string(path)?;
    parse_trace(&payload)
}
