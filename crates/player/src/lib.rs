//! stepview Execution Trace Player
//!
//! Replays recorded execution traces: an external producer supplies an
//! ordered sequence of snapshots ([`types::TraceStep`]), and the player
//! offers bounded forward/backward/random-access navigation plus
//! deterministic structural rendering of the untyped values each snapshot
//! captured.

pub mod error;
pub mod ingest;
pub mod player;
pub mod recorder;
pub mod render;
pub mod types;
pub mod value;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(test)]
mod tests;
