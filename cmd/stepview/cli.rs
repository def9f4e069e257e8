use std::path::PathBuf;

use clap::{Parser as ClapParser, Subcommand as ClapSubcommand};
use stepview_player::error::TraceError;
use stepview_player::{cli, ingest, recorder};
use tracing::{Level, info};

#[allow(clippy::upper_case_acronyms)]
#[derive(ClapParser)]
#[command(
    name = "stepview",
    about = "Execution trace player: replay recorded algorithm traces step by step"
)]
pub struct CLI {
    #[arg(
        long = "log.level",
        default_value_t = Level::INFO,
        value_name = "LOG_LEVEL",
        help = "Possible values: info, debug, trace, warn, error",
        env = "STEPVIEW_LOG_LEVEL"
    )]
    pub log_level: Level,
    #[command(subcommand)]
    pub command: Subcommand,
}

#[derive(ClapSubcommand)]
pub enum Subcommand {
    /// Replay a trace artifact produced by an instrumentation backend.
    #[command(name = "replay")]
    Replay {
        /// Path to the trace JSON file (an array of trace steps).
        trace: PathBuf,
    },
    /// Record a permutation backtracking trace in-process and replay it.
    #[command(name = "demo")]
    Demo {
        /// Comma separated integers to permute.
        #[arg(long, value_delimiter = ',', default_value = "3,1,2")]
        nums: Vec<i64>,
    },
}

pub fn run(command: Subcommand) -> Result<(), TraceError> {
    match command {
        Subcommand::Replay { trace } => {
            let steps = ingest::load_trace(&trace)?;
            info!(
                "Loaded {} steps from {}. Starting player...\n",
                steps.len(),
                trace.display()
            );
            cli::run(steps)
        }
        Subcommand::Demo { nums } => {
            let steps = recorder::record_permutations(&nums);
            info!("Recorded {} steps. Starting player...\n", steps.len());
            cli::run(steps)
        }
    }
}
