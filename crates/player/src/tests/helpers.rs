//! Shared fixtures for the test modules.

use indexmap::IndexMap;

use crate::player::TracePlayer;
use crate::types::{StackFrame, TraceStep, UNKNOWN_LINE};
use crate::value::CapturedValue;

/// A minimal step with the given 1-based ordinal and action label.
pub fn make_step(ordinal: i64, action: &str) -> TraceStep {
    TraceStep {
        step: ordinal,
        function: "f".to_string(),
        variables: IndexMap::new(),
        call_stack: Vec::new(),
        line: UNKNOWN_LINE,
        action: action.to_string(),
        details: format!("step {ordinal}"),
    }
}

/// A sequence of `n` minimal steps with ordinals `1..=n`.
pub fn make_steps(n: usize) -> Vec<TraceStep> {
    (1..=n as i64).map(|i| make_step(i, "step")).collect()
}

/// A player over `n` minimal steps.
pub fn make_player(n: usize) -> TracePlayer {
    TracePlayer::new(make_steps(n)).expect("non-empty sequence")
}

/// A frame with parameters but no locals.
pub fn make_frame(name: &str, params: &[(&str, i64)]) -> StackFrame {
    StackFrame {
        function_name: name.to_string(),
        parameters: params
            .iter()
            .map(|(k, v)| (k.to_string(), CapturedValue::Int(*v)))
            .collect(),
        local_variables: IndexMap::new(),
    }
}
