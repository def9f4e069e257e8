//! Display formatting for REPL output.

use std::collections::BTreeSet;

use crate::player::TracePlayer;
use crate::render;
use crate::types::TraceStep;

/// Format a step for detailed display (after any navigation command).
pub fn format_step(step: &TraceStep, position: usize, total: usize) -> String {
    let vars = render::render_variables(&step.variables);
    let vars_preview = vars
        .iter()
        .map(|(name, value)| format!("{name}: {value}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "[{}/{}] step={}  {}  line={}  action={}\n  {}\n  vars({}): {}",
        position,
        total,
        step.step,
        step.function,
        step.line_display(),
        step.action,
        step.details,
        vars.len(),
        vars_preview,
    )
}

/// Format a step compactly (for list view).
pub fn format_step_compact(
    step: &TraceStep,
    position: usize,
    total: usize,
    is_cursor: bool,
) -> String {
    let marker = if is_cursor { ">" } else { " " };
    format!(
        "{marker} [{}/{}] step={}  {:<12} {}",
        position, total, step.step, step.action, step.details,
    )
}

/// Format a trace summary.
pub fn format_info(player: &TracePlayer) -> String {
    let step = player.current_step();
    format!(
        "Trace: {} steps\nPosition: {}/{} (step {}, function {}, action {})",
        player.len(),
        player.position(),
        player.len(),
        step.step,
        step.function,
        step.action,
    )
}

/// Format the variables of a step, one per line.
pub fn format_variables(step: &TraceStep) -> String {
    let vars = render::render_variables(&step.variables);
    if vars.is_empty() {
        return "No variables recorded.".to_string();
    }
    let mut lines = vec![format!("Variables ({}):", vars.len())];
    for (name, value) in vars {
        lines.push(format!("  {name}: {value}"));
    }
    lines.join("\n")
}

/// Format the call stack of a step, outermost frame first.
pub fn format_stack(step: &TraceStep) -> String {
    let frames = render::render_call_stack(&step.call_stack);
    if frames.is_empty() {
        return "No call stack recorded.".to_string();
    }
    let mut lines = vec![format!("Call stack ({} frames):", frames.len())];
    for (i, frame) in frames.iter().enumerate() {
        lines.push(format!("  [{i}]: {frame}"));
    }
    lines.join("\n")
}

/// Format the list of active breakpoints.
pub fn format_breakpoints(breakpoints: &BTreeSet<String>) -> String {
    if breakpoints.is_empty() {
        return "No breakpoints set.".to_string();
    }
    let mut lines = vec![format!("Breakpoints ({}):", breakpoints.len())];
    for action in breakpoints {
        lines.push(format!("  action '{action}'"));
    }
    lines.join("\n")
}

/// Static help text.
pub fn format_help() -> String {
    "\
Commands:
  n, next            Step forward one snapshot
  p, prev            Step backward one snapshot
  f, first           Jump to the first snapshot
  la, last           Jump to the last snapshot
  g, goto <n>        Jump to position n (out-of-range input saturates)
  c, continue        Continue until a breakpoint action or the end
  rc, reverse-continue  Continue backward until a breakpoint action or the start
  b, break <action>  Break on steps whose action matches
  d, delete <action> Delete an action breakpoint
  bp, breakpoints    List all breakpoints
  i, info            Show trace summary
  v, vars            Show current step's variables
  st, stack          Show current step's call stack
  l, list [n]        List n steps around the cursor (default: 5)
  h, help            Show this help
  q, quit            Exit the player"
        .to_string()
}
