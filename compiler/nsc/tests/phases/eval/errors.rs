//! Runtime errors as seen by a run and as rendered for the terminal.

use crate::common::{error_of, run};
use ns_diagnostic::emitter::ColorMode;
use ns_diagnostic::ErrorCode;
use ns_eval::EvalErrorKind;
use nsc::{report_error, RunError};
use pretty_assertions::assert_eq;

fn render(source: &str) -> String {
    let err = error_of(source);
    let mut out = Vec::new();
    report_error(&err, source, &mut out, ColorMode::Never, false);
    String::from_utf8(out).unwrap()
}

#[test]
fn categories() {
    let cases = [
        ("x", "NameError", ErrorCode::E6020),
        ("function f(a, b) { a } f(none)", "ArityError", ErrorCode::E6030),
        ("car(nil, nil)", "ArityError", ErrorCode::E6030),
        ("car(none)", "TypeError", ErrorCode::E6010),
        ("print(none)", "TypeError", ErrorCode::E6010),
        ("nil(none)", "TypeError", ErrorCode::E6032),
        ("match none { case nil -> nil }", "MatchError", ErrorCode::E6040),
    ];
    for (source, category, code) in cases {
        let err = error_of(source);
        assert_eq!(err.category(), category, "{source}");
        assert_eq!(err.to_diagnostic().code, code, "{source}");
    }
}

#[test]
fn side_effects_before_error_remain() {
    let (result, output) = run("print(pair(none, list(none))) car(nil) print(pair(none, nil))");
    assert!(matches!(result, Err(RunError::Eval(_))));
    assert_eq!(output, "1");
}

#[test]
fn error_inside_function_reports_innermost_location() {
    let err = error_of("function f(p) {\n  car(p)\n}\nf(none)");
    let RunError::Eval(err) = err else {
        panic!("expected a runtime error");
    };
    assert_eq!(
        err.kind,
        EvalErrorKind::TypeMismatch {
            operation: "car",
            expected: "pair",
            got: "none"
        }
    );
    let rendered = render("function f(p) {\n  car(p)\n}\nf(none)");
    assert!(rendered.contains("--> 2:3"), "got:\n{rendered}");
}

#[test]
fn rendered_undefined_variable() {
    let rendered = render("pair(none,\n  missing)");
    assert_eq!(
        rendered,
        "error[E6020]: undefined variable missing\n\
         \x20 --> 2:3: not found in this scope\n\
         \x20 = note: names are bound by function parameters, match cases and function definitions\n"
    );
}

#[test]
fn rendered_match_failure_suggests_default() {
    let rendered = render("match none { case nil -> nil }");
    assert!(rendered.starts_with("error[E6040]: pattern matching failure\n"));
    assert!(rendered.contains("= help: add a `default -> ...` clause"));
}

#[test]
fn display_includes_category() {
    assert_eq!(error_of("y").to_string(), "NameError: undefined variable y");
    assert!(error_of("pair(").to_string().starts_with("ParseError: "));
    assert!(error_of("#").to_string().starts_with("LexError: "));
}

#[test]
fn rendered_arity_error_points_at_definition() {
    let rendered = render("function f(a, b) { a }\nf(none)");
    assert_eq!(
        rendered,
        "error[E6030]: argument count mismatch: f expects 2 arguments, got 1\n\
         \x20 --> 2:1: called here\n\
         \x20     1:1: function defined here\n"
    );
}

#[test]
fn builtin_arity_error_has_no_definition_label() {
    let rendered = render("car(nil, nil)");
    assert!(!rendered.contains("defined here"), "got:\n{rendered}");
}
