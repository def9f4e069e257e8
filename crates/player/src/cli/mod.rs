//! Interactive CLI for replaying a trace.

pub mod commands;
pub mod formatter;
pub mod repl;

use crate::error::TraceError;
use crate::player::TracePlayer;
use crate::types::TraceStep;

/// Construct a player over `steps` and hand it to the REPL.
pub fn run(steps: Vec<TraceStep>) -> Result<(), TraceError> {
    let player = TracePlayer::new(steps)?;
    repl::start(player)
}
