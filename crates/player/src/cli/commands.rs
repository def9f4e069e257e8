//! Command parsing and execution for the replay REPL.

use std::collections::BTreeSet;

use crate::cli::formatter;
use crate::player::TracePlayer;

/// A parsed replay command.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    First,
    Last,
    Goto { index: i64 },
    Continue,
    ReverseContinue,
    Break { action: String },
    Delete { action: String },
    Breakpoints,
    Info,
    Vars,
    Stack,
    List { count: usize },
    Help,
    Quit,
}

/// Result of executing a command.
pub enum Action {
    Print(String),
    Quit,
}

/// Mutable state for the replay session beyond the player's cursor.
pub struct ReplState {
    /// Action labels to stop at during continue/reverse-continue.
    pub breakpoints: BTreeSet<String>,
}

/// Parse user input into a command. Returns `None` for empty or unrecognized input.
pub fn parse(input: &str) -> Option<Command> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut parts = trimmed.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let arg = parts.next().map(str::trim);

    match cmd {
        "n" | "next" => Some(Command::Next),
        "p" | "prev" | "previous" => Some(Command::Previous),
        "f" | "first" => Some(Command::First),
        "la" | "last" => Some(Command::Last),
        "g" | "goto" => Some(Command::Goto {
            index: arg?.parse::<i64>().ok()?,
        }),
        "c" | "continue" => Some(Command::Continue),
        "rc" | "reverse-continue" => Some(Command::ReverseContinue),
        "b" | "break" => Some(Command::Break {
            action: arg?.to_string(),
        }),
        "d" | "delete" => Some(Command::Delete {
            action: arg?.to_string(),
        }),
        "bp" | "breakpoints" => Some(Command::Breakpoints),
        "i" | "info" => Some(Command::Info),
        "v" | "vars" => Some(Command::Vars),
        "st" | "stack" => Some(Command::Stack),
        "l" | "list" => {
            let count = arg.and_then(|a| a.parse::<usize>().ok()).unwrap_or(5);
            Some(Command::List { count })
        }
        "h" | "help" => Some(Command::Help),
        "q" | "quit" => Some(Command::Quit),
        _ => {
            eprintln!("Unknown command: '{cmd}'. Type 'help' for available commands.");
            None
        }
    }
}

/// Execute a command against the player and session state.
pub fn execute(cmd: &Command, player: &mut TracePlayer, state: &mut ReplState) -> Action {
    let total = player.len();
    match cmd {
        Command::Next => {
            if player.at_last() {
                Action::Print("Already at last step.".to_string())
            } else {
                player.next();
                Action::Print(format_current(player, total))
            }
        }
        Command::Previous => {
            if player.at_first() {
                Action::Print("Already at first step.".to_string())
            } else {
                player.previous();
                Action::Print(format_current(player, total))
            }
        }
        Command::First => {
            player.first();
            Action::Print(format_current(player, total))
        }
        Command::Last => {
            player.last();
            Action::Print(format_current(player, total))
        }
        // Out-of-range input saturates to the nearest end; never an error.
        Command::Goto { index } => {
            player.go_to(*index);
            Action::Print(format_current(player, total))
        }
        Command::Continue => execute_continue(player, state, total),
        Command::ReverseContinue => execute_reverse_continue(player, state, total),
        Command::Break { action } => {
            state.breakpoints.insert(action.clone());
            Action::Print(format!("Breakpoint set on action '{action}'."))
        }
        Command::Delete { action } => {
            if state.breakpoints.remove(action) {
                Action::Print(format!("Breakpoint removed on action '{action}'."))
            } else {
                Action::Print(format!("No breakpoint on action '{action}'."))
            }
        }
        Command::Breakpoints => Action::Print(formatter::format_breakpoints(&state.breakpoints)),
        Command::Info => Action::Print(formatter::format_info(player)),
        Command::Vars => Action::Print(formatter::format_variables(player.current_step())),
        Command::Stack => Action::Print(formatter::format_stack(player.current_step())),
        Command::List { count } => execute_list(player, total, *count),
        Command::Help => Action::Print(formatter::format_help()),
        Command::Quit => Action::Quit,
    }
}

fn format_current(player: &TracePlayer, total: usize) -> String {
    formatter::format_step(player.current_step(), player.position(), total)
}

fn execute_continue(player: &mut TracePlayer, state: &ReplState, total: usize) -> Action {
    loop {
        if player.at_last() {
            return Action::Print(format!(
                "Reached end of trace.\n{}",
                format_current(player, total)
            ));
        }
        player.next();
        if state.breakpoints.contains(&player.current_step().action) {
            return Action::Print(format!(
                "Breakpoint hit on action '{}'\n{}",
                player.current_step().action,
                format_current(player, total)
            ));
        }
    }
}

fn execute_reverse_continue(player: &mut TracePlayer, state: &ReplState, total: usize) -> Action {
    loop {
        if player.at_first() {
            return Action::Print(format!(
                "Reached start of trace.\n{}",
                format_current(player, total)
            ));
        }
        player.previous();
        if state.breakpoints.contains(&player.current_step().action) {
            return Action::Print(format!(
                "Breakpoint hit on action '{}'\n{}",
                player.current_step().action,
                format_current(player, total)
            ));
        }
    }
}

fn execute_list(player: &TracePlayer, total: usize, count: usize) -> Action {
    let pos = player.position();
    let half = count / 2;
    let start = pos.saturating_sub(half);
    let steps = player.steps_range(start, count);
    if steps.is_empty() {
        return Action::Print("No steps recorded.".to_string());
    }
    let lines: Vec<String> = steps
        .iter()
        .enumerate()
        .map(|(offset, s)| {
            let index = start + offset;
            formatter::format_step_compact(s, index, total, index == pos)
        })
        .collect();
    Action::Print(lines.join("\n"))
}
