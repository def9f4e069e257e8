//! Core data types for the trace player.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::value::CapturedValue;

/// Sentinel `line` value meaning "unknown / not applicable".
pub const UNKNOWN_LINE: i64 = -1;

/// One entry of the call stack at a given snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackFrame {
    pub function_name: String,
    #[serde(default)]
    pub parameters: IndexMap<String, CapturedValue>,
    #[serde(default)]
    pub local_variables: IndexMap<String, CapturedValue>,
}

/// One recorded execution snapshot.
///
/// Immutable once ingested; the player navigates over a sequence of these
/// and never rewrites their contents. `variables` keeps the producer's
/// insertion order, which is also the display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceStep {
    /// Producer-assigned ordinal (1-based for the known producers). Not
    /// necessarily contiguous, but non-decreasing across the sequence.
    pub step: i64,
    /// Name of the routine active when the snapshot was captured.
    pub function: String,
    /// Named values captured at this point, in producer order.
    #[serde(default)]
    pub variables: IndexMap<String, CapturedValue>,
    /// Call stack at this point, outermost first as given. Some producers
    /// omit it entirely.
    #[serde(default)]
    pub call_stack: Vec<StackFrame>,
    /// Source line, or [`UNKNOWN_LINE`].
    #[serde(default = "default_line")]
    pub line: i64,
    /// Producer-defined label of what happened (e.g. "swap", "backtrack").
    pub action: String,
    /// Free-form human-readable description.
    pub details: String,
}

fn default_line() -> i64 {
    UNKNOWN_LINE
}

impl TraceStep {
    /// Display form of `line`: the number itself, or "N/A" for the sentinel.
    pub fn line_display(&self) -> String {
        if self.line == UNKNOWN_LINE {
            "N/A".to_string()
        } else {
            self.line.to_string()
        }
    }
}
