//! Rendering tests — deterministic structural output for arbitrary values.

use indexmap::IndexMap;

use super::helpers::*;
use crate::render::{
    render_call_stack, render_frame, render_step, render_value, render_variables,
};
use crate::types::{StackFrame, UNKNOWN_LINE};
use crate::value::CapturedValue;

#[test]
fn scalars_render_their_literal_form() {
    assert_eq!(render_value(&CapturedValue::Null), "null");
    assert_eq!(render_value(&CapturedValue::Bool(true)), "true");
    assert_eq!(render_value(&CapturedValue::Bool(false)), "false");
    assert_eq!(render_value(&CapturedValue::Int(-7)), "-7");
    assert_eq!(render_value(&CapturedValue::Float(2.5)), "2.5");
}

#[test]
fn text_is_quoted_without_escaping() {
    assert_eq!(render_value(&"hello".into()), "\"hello\"");
    // Embedded quotes are wrapped verbatim, not escaped.
    assert_eq!(render_value(&"a \"b\" c".into()), "\"a \"b\" c\"");
    assert_eq!(render_value(&"".into()), "\"\"");
}

#[test]
fn sequences_are_bracketed_in_original_order() {
    assert_eq!(
        render_value(&CapturedValue::int_sequence([3, 1, 2])),
        "[3, 1, 2]"
    );
    assert_eq!(render_value(&CapturedValue::Sequence(Vec::new())), "[]");
}

#[test]
fn heterogeneous_sequences_render_each_element_by_its_own_rule() {
    let value = CapturedValue::Sequence(vec![
        CapturedValue::Int(1),
        "two".into(),
        CapturedValue::Null,
        CapturedValue::int_sequence([3]),
    ]);
    assert_eq!(render_value(&value), "[1, \"two\", null, [3]]");
}

#[test]
fn empty_mapping_renders_braces_nonempty_renders_bare_entries() {
    assert_eq!(render_value(&CapturedValue::Mapping(IndexMap::new())), "{}");

    let value = CapturedValue::mapping([
        ("nums", CapturedValue::int_sequence([1, 2, 3])),
        ("start", CapturedValue::Int(0)),
    ]);
    assert_eq!(render_value(&value), "nums: [1, 2, 3], start: 0");
}

#[test]
fn mapping_entries_keep_insertion_order() {
    let value = CapturedValue::mapping([
        ("z", CapturedValue::Int(1)),
        ("a", CapturedValue::Int(2)),
        ("m", CapturedValue::Int(3)),
    ]);
    assert_eq!(render_value(&value), "z: 1, a: 2, m: 3");
}

#[test]
fn deep_nesting_renders_recursively() {
    let value = CapturedValue::mapping([(
        "grid",
        CapturedValue::Sequence(vec![
            CapturedValue::int_sequence([1, 0]),
            CapturedValue::Sequence(vec![CapturedValue::mapping([(
                "cell",
                CapturedValue::Bool(false),
            )])]),
        ]),
    )]);
    assert_eq!(render_value(&value), "grid: [[1, 0], [cell: false]]");
}

#[test]
fn rendering_is_pure() {
    let value = CapturedValue::mapping([
        ("xs", CapturedValue::int_sequence([9, 8])),
        ("label", "done".into()),
    ]);
    assert_eq!(render_value(&value), render_value(&value));
}

#[test]
fn frame_without_locals_has_no_suffix() {
    let frame = make_frame("backtrack", &[("row", 0)]);
    assert_eq!(render_frame(&frame), "backtrack(row: 0)");
}

#[test]
fn frame_with_locals_appends_local_vars_suffix() {
    let mut frame = make_frame("solve", &[("row", 1), ("col", 2)]);
    frame
        .local_variables
        .insert("placed".to_string(), CapturedValue::Bool(true));
    assert_eq!(
        render_frame(&frame),
        "solve(row: 1, col: 2) [Local Vars: placed: true]"
    );
}

#[test]
fn frame_without_parameters_renders_empty_parens() {
    let frame = StackFrame {
        function_name: "main".to_string(),
        parameters: IndexMap::new(),
        local_variables: IndexMap::new(),
    };
    assert_eq!(render_frame(&frame), "main()");
}

#[test]
fn call_stack_renders_one_line_per_frame_in_order() {
    let frames = vec![
        make_frame("main", &[]),
        make_frame("permute", &[("start", 0)]),
    ];
    assert_eq!(
        render_call_stack(&frames),
        vec!["main()".to_string(), "permute(start: 0)".to_string()]
    );
    assert!(render_call_stack(&[]).is_empty());
}

#[test]
fn variables_render_as_name_value_pairs_in_map_order() {
    let mut variables = IndexMap::new();
    variables.insert(
        "nums".to_string(),
        CapturedValue::int_sequence([1, 2, 3]),
    );
    variables.insert("start".to_string(), CapturedValue::Int(0));

    assert_eq!(
        render_variables(&variables),
        vec![
            ("nums".to_string(), "[1, 2, 3]".to_string()),
            ("start".to_string(), "0".to_string()),
        ]
    );
}

#[test]
fn render_step_carries_header_fields_verbatim() {
    let mut step = make_step(7, "swap");
    step.function = "permute".to_string();
    step.details = "Swapping nums[0] and nums[1]".to_string();
    step.variables
        .insert("i".to_string(), CapturedValue::Int(1));
    step.call_stack.push(make_frame("permute", &[("start", 0)]));

    let rendered = render_step(&step);
    assert_eq!(rendered.step, 7);
    assert_eq!(rendered.function, "permute");
    assert_eq!(rendered.action, "swap");
    assert_eq!(rendered.details, "Swapping nums[0] and nums[1]");
    assert_eq!(rendered.line, "N/A");
    assert_eq!(rendered.variables, vec![("i".to_string(), "1".to_string())]);
    assert_eq!(rendered.call_stack, vec!["permute(start: 0)".to_string()]);
}

#[test]
fn line_display_uses_sentinel_for_unknown() {
    let mut step = make_step(1, "start");
    assert_eq!(step.line, UNKNOWN_LINE);
    assert_eq!(step.line_display(), "N/A");

    step.line = 12;
    assert_eq!(step.line_display(), "12");
}
