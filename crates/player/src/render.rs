//! Pure structural renderers for captured values, variables, and call stacks.
//!
//! Everything here is a deterministic function of its input: rendering the
//! same snapshot twice yields byte-identical output, so callers may recompute
//! on every navigation event or memoize by step index.

use indexmap::IndexMap;

use crate::types::{StackFrame, TraceStep};
use crate::value::CapturedValue;

/// Render one captured value, recursively, depth-first.
///
/// Sequences are bracketed (`[1, 2, 3]`, empty renders `[]`). Mappings render
/// `{}` when empty but are otherwise unbracketed (`k: v, k2: v2`), relying on
/// the surrounding context for delimitation. Text is wrapped in literal double
/// quotes with no escaping. Everything else renders its literal textual form.
pub fn render_value(value: &CapturedValue) -> String {
    match value {
        CapturedValue::Null => "null".to_string(),
        CapturedValue::Bool(b) => b.to_string(),
        CapturedValue::Int(i) => i.to_string(),
        CapturedValue::Float(f) => f.to_string(),
        CapturedValue::Text(s) => format!("\"{s}\""),
        CapturedValue::Sequence(items) => {
            let inner = items
                .iter()
                .map(render_value)
                .collect::<Vec<_>>()
                .join(", ");
            format!("[{inner}]")
        }
        CapturedValue::Mapping(entries) => {
            if entries.is_empty() {
                "{}".to_string()
            } else {
                render_entries(entries)
            }
        }
    }
}

/// Render map entries as `key: value` pairs joined by `, `, in map order.
fn render_entries(entries: &IndexMap<String, CapturedValue>) -> String {
    entries
        .iter()
        .map(|(k, v)| format!("{k}: {}", render_value(v)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render one call-stack frame: `name(p1: v1, p2: v2)`, with a
/// ` [Local Vars: ...]` suffix only when the frame has locals.
pub fn render_frame(frame: &StackFrame) -> String {
    let mut out = format!(
        "{}({})",
        frame.function_name,
        render_entries(&frame.parameters)
    );
    if !frame.local_variables.is_empty() {
        out.push_str(&format!(
            " [Local Vars: {}]",
            render_entries(&frame.local_variables)
        ));
    }
    out
}

/// Render a call stack, one line per frame, in the given order.
///
/// An empty stack renders as no lines (absence, not an error); user-facing
/// "nothing to display" wording is the caller's concern.
pub fn render_call_stack(frames: &[StackFrame]) -> Vec<String> {
    frames.iter().map(render_frame).collect()
}

/// Render a step's variables as `(name, rendered value)` pairs in map order.
pub fn render_variables(
    variables: &IndexMap<String, CapturedValue>,
) -> Vec<(String, String)> {
    variables
        .iter()
        .map(|(name, value)| (name.clone(), render_value(value)))
        .collect()
}

/// The rendered artifacts for one step, handed to the display layer:
/// verbatim header fields plus the rendered variables and call stack.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedStep {
    pub step: i64,
    pub function: String,
    pub line: String,
    pub action: String,
    pub details: String,
    pub variables: Vec<(String, String)>,
    pub call_stack: Vec<String>,
}

/// Render everything the display layer needs for one step.
pub fn render_step(step: &TraceStep) -> RenderedStep {
    RenderedStep {
        step: step.step,
        function: step.function.clone(),
        line: step.line_display(),
        action: step.action.clone(),
        details: step.details.clone(),
        variables: render_variables(&step.variables),
        call_stack: render_call_stack(&step.call_stack),
    }
}
