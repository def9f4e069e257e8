//! In-process trace producer: records a backtracking permutation run.
//!
//! This is the "list of integers" producer: it runs the classic swap-based
//! permutation algorithm over the input and records a [`TraceStep`] at every
//! interesting point (recursion entry, base case, swap, backtrack). The
//! resulting sequence has 1-based contiguous ordinals, no call stack, and
//! `line` left at the unknown sentinel, matching the producer's wire output.

use indexmap::IndexMap;

use crate::types::{TraceStep, UNKNOWN_LINE};
use crate::value::CapturedValue;

/// Records permutation steps into a `Vec<TraceStep>`.
pub struct PermutationRecorder {
    steps: Vec<TraceStep>,
    step_counter: i64,
}

/// Record the full permutation trace for `nums`.
pub fn record_permutations(nums: &[i64]) -> Vec<TraceStep> {
    let mut recorder = PermutationRecorder::new();
    let mut nums = nums.to_vec();
    recorder.permute(&mut nums, 0);
    recorder.into_steps()
}

impl PermutationRecorder {
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            step_counter: 1,
        }
    }

    pub fn into_steps(self) -> Vec<TraceStep> {
        self.steps
    }

    fn permute(&mut self, nums: &mut [i64], start: usize) {
        self.record(
            nums,
            start,
            None,
            "recurse",
            format!(
                "Entering recursion with start={start}, nums={}",
                fmt_nums(nums)
            ),
        );

        if start + 1 == nums.len() {
            self.record(
                nums,
                start,
                None,
                "base_case",
                format!("Base case reached: {}", fmt_nums(nums)),
            );
            return;
        }

        for i in start..nums.len() {
            self.record(
                nums,
                start,
                Some(i),
                "swap",
                format!("Swapping nums[{start}] and nums[{i}]"),
            );
            nums.swap(start, i);

            self.permute(nums, start + 1);

            // Recorded before the swap-back, so the step shows the state
            // being undone.
            self.record(
                nums,
                start,
                Some(i),
                "backtrack",
                format!("Backtracking (swapping back) nums[{start}] and nums[{i}]"),
            );
            nums.swap(start, i);
        }
    }

    fn record(
        &mut self,
        nums: &[i64],
        start: usize,
        i: Option<usize>,
        action: &str,
        details: String,
    ) {
        let mut variables: IndexMap<String, CapturedValue> = IndexMap::new();
        variables.insert(
            "nums".to_string(),
            CapturedValue::int_sequence(nums.iter().copied()),
        );
        variables.insert("start".to_string(), CapturedValue::Int(start as i64));
        if let Some(i) = i {
            variables.insert("i".to_string(), CapturedValue::Int(i as i64));
        }

        self.steps.push(TraceStep {
            step: self.step_counter,
            function: "permute".to_string(),
            variables,
            call_stack: Vec::new(),
            line: UNKNOWN_LINE,
            action: action.to_string(),
            details,
        });
        self.step_counter += 1;
    }
}

impl Default for PermutationRecorder {
    fn default() -> Self {
        Self::new()
    }
}

fn fmt_nums(nums: &[i64]) -> String {
    format!(
        "[{}]",
        nums.iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    )
}
