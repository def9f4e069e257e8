//! Trace player: bounded time-travel navigation over a recorded sequence.

use crate::error::TraceError;
use crate::types::TraceStep;

/// Navigation state machine over an immutable, non-empty step sequence.
///
/// The only mutable state is the cursor, always kept inside `[0, len - 1]`.
/// Every navigation operation clamps at the boundaries instead of failing:
/// moving past either end is a no-op, and random access saturates. After any
/// operation the current step is `steps[cursor]`, which each operation also
/// returns so callers can re-render immediately.
pub struct TracePlayer {
    steps: Vec<TraceStep>,
    cursor: usize,
}

impl TracePlayer {
    /// Construct a player positioned at the first step.
    ///
    /// An empty sequence is rejected here; a constructed player always has a
    /// current step and no failure path on navigation.
    pub fn new(steps: Vec<TraceStep>) -> Result<Self, TraceError> {
        if steps.is_empty() {
            return Err(TraceError::EmptyTrace);
        }
        Ok(Self { steps, cursor: 0 })
    }

    /// Total number of steps in the trace.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false: construction rejects empty sequences.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Current cursor position (0-based index into the sequence).
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// The step at the current cursor position.
    pub fn current_step(&self) -> &TraceStep {
        &self.steps[self.cursor]
    }

    /// Whether the cursor is at the first step.
    pub fn at_first(&self) -> bool {
        self.cursor == 0
    }

    /// Whether the cursor is at the last step.
    pub fn at_last(&self) -> bool {
        self.cursor == self.steps.len() - 1
    }

    /// Jump to the first step.
    pub fn first(&mut self) -> &TraceStep {
        self.cursor = 0;
        self.current_step()
    }

    /// Move one step back, staying put when already at the first step.
    pub fn previous(&mut self) -> &TraceStep {
        self.cursor = self.cursor.saturating_sub(1);
        self.current_step()
    }

    /// Move one step forward, staying put when already at the last step.
    pub fn next(&mut self) -> &TraceStep {
        self.cursor = (self.cursor + 1).min(self.steps.len() - 1);
        self.current_step()
    }

    /// Jump to the last step.
    pub fn last(&mut self) -> &TraceStep {
        self.cursor = self.steps.len() - 1;
        self.current_step()
    }

    /// Jump to an arbitrary index, clamped into `[0, len - 1]`.
    ///
    /// Takes `i64` so out-of-range input in either direction saturates
    /// instead of erroring (negative indexes land on the first step).
    pub fn go_to(&mut self, index: i64) -> &TraceStep {
        let max = (self.steps.len() - 1) as i64;
        self.cursor = index.clamp(0, max) as usize;
        self.current_step()
    }

    /// A window of steps starting at `start` with at most `count` items.
    pub fn steps_range(&self, start: usize, count: usize) -> &[TraceStep] {
        let len = self.steps.len();
        if start >= len {
            return &[];
        }
        let end = len.min(start.saturating_add(count));
        &self.steps[start..end]
    }

    /// Read-only access to the full sequence.
    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }
}
