//! Interactive REPL loop for trace replay.

use std::collections::BTreeSet;

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};

use crate::cli::commands::{Action, ReplState};
use crate::cli::{commands, formatter};
use crate::error::TraceError;
use crate::player::TracePlayer;

/// Start the interactive replay REPL over an already-constructed player.
pub fn start(mut player: TracePlayer) -> Result<(), TraceError> {
    let config = Config::builder().auto_add_history(true).build();
    let mut rl: Editor<(), DefaultHistory> =
        Editor::with_config(config).map_err(|e| TraceError::Cli(e.to_string()))?;
    let mut state = ReplState {
        breakpoints: BTreeSet::new(),
    };

    let total = player.len();

    println!(
        "{}",
        formatter::format_step(player.current_step(), player.position(), total)
    );
    println!("Type 'help' for available commands.\n");

    loop {
        let prompt = format!("(trace {}/{}) ", player.position(), total);
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if let Some(cmd) = commands::parse(trimmed) {
                    match commands::execute(&cmd, &mut player, &mut state) {
                        Action::Print(s) => println!("{s}"),
                        Action::Quit => break,
                    }
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Readline error: {e}");
                break;
            }
        }
    }

    Ok(())
}
