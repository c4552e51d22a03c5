//! Whole programs and their output.

use crate::common::{numeral, output_of, print_text, run};
use ns_eval::Value;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn hello_world() {
    assert_eq!(output_of(&print_text("Hello, World!\n")), "Hello, World!\n");
}

#[test]
fn print_formats() {
    assert_eq!(output_of("print(pair(none, nil))"), "0");
    assert_eq!(
        output_of("print(pair(none, pair(none, pair(none, pair(none, nil)))))"),
        "3"
    );
    assert_eq!(output_of(&format!("print(pair(undefined, {}))", numeral(65))), "A");
    assert_eq!(output_of(&format!("print(pair(undefined, {}))", numeral(200))), "");
    assert_eq!(
        output_of("print(pair(null, none)) print(pair(null, list(nil)))"),
        "nonepair(...)"
    );
}

#[test]
fn last_statement_is_the_result() {
    let (result, _) = run("none null pair(nil, nil)");
    assert_eq!(
        result.unwrap(),
        Some(Value::pair(Value::Nil, Value::Nil))
    );
}

#[test]
fn function_definition_can_be_the_result() {
    let (result, _) = run("function f() { nil }");
    assert_eq!(result.unwrap().unwrap().to_string(), "<function>");
}

#[test]
fn self_recursion_resolves_own_name() {
    let (result, _) = run(
        "function f(n) { if (eq(n, nil)) { none } else { f(nil) } }\n\
         f(undefined)",
    );
    assert_eq!(result.unwrap(), Some(Value::None));
}

/// Unary addition by recursion on the first argument.
const ADD: &str = "
function add(a, b) {
    match a {
        case nil -> b
        case pair(none, rest) -> pair(none, add(rest, b))
    }
}
";

#[test]
fn unary_arithmetic() {
    let source = format!("{ADD} print(pair(none, add({}, {})))", numeral(2), numeral(3));
    assert_eq!(output_of(&source), "5");
}

#[test]
fn mutual_recursion_through_top_level() {
    let source = "
        function even(n) { match n { case nil -> nil case pair(_, rest) -> odd(rest) } }
        function odd(n) { match n { case nil -> undefined case pair(_, rest) -> even(rest) } }
        print(pair(null, even(list(none, none, none, none))))
        print(pair(null, even(list(none, none, none))))
    ";
    assert_eq!(output_of(source), "nilundefined");
}

#[test]
fn booleans_drive_if() {
    let source = "
        function not(b) { if b { undefined } else { nil } }
        print(pair(null, not(eq(none, none))))
        print(pair(null, not(eq(none, null))))
    ";
    assert_eq!(output_of(source), "undefinednil");
}

#[test]
fn match_default_and_computed_patterns() {
    let source = "
        function classify(v) {
            match v {
                case nil -> none
                case pair(x, nil) -> null
                case eq(none, none) -> undefined
                default -> v
            }
        }
        print(pair(null, classify(nil)))
        print(pair(null, classify(list(none))))
        print(pair(null, classify(list(none, none))))
    ";
    // `eq(none, none)` evaluates to nil, which the first case already takes,
    // so the two-element list falls through to the default.
    assert_eq!(output_of(source), "nonenullpair(...)");
}

#[test]
fn list_elements_evaluate_left_to_right() {
    let source = format!(
        "list({}, {})",
        print_text("a"),
        print_text("b")
    );
    assert_eq!(output_of(&source), "ab");
}

#[test]
fn deep_recursion_completes() {
    let source = format!(
        "{ADD} print(pair(none, add({}, {})))",
        numeral(3_000),
        numeral(3_000)
    );
    assert_eq!(output_of(&source), "6000");
}

#[test]
fn long_list_patterns_match() {
    let long = numeral(100_000);
    let source = format!("match {long} {{ case {long} -> print(pair(none, nil)) }}");
    assert_eq!(output_of(&source), "0");

    // Same length, different last element: falls through to the default.
    let mut items = vec!["none"; 99_999];
    items.push("null");
    let other = format!("list({})", items.join(", "));
    let source = format!(
        "match {long} {{ case {other} -> nil default -> print(pair(none, list(none))) }}"
    );
    assert_eq!(output_of(&source), "1");
}

proptest! {
    #[test]
    fn prop_print_numeral_prints_its_length(n in 0usize..300) {
        prop_assert_eq!(output_of(&format!("print(pair(none, {}))", numeral(n))), n.to_string());
    }

    #[test]
    fn prop_ascii_round_trip(text in "[ -~]{0,8}") {
        prop_assert_eq!(output_of(&print_text(&text)), text);
    }

    #[test]
    fn prop_eq_is_structural(a in 0usize..6, b in 0usize..6) {
        let source = format!("print(pair(null, eq({}, {})))", numeral(a), numeral(b));
        let expected = if a == b { "nil" } else { "undefined" };
        prop_assert_eq!(output_of(&source), expected);
    }
}
