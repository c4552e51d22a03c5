//! Lexical and parse errors surfaced by a run.
//!
//! - the whole source is lexed before anything runs
//! - statements before a parse error have already run

use crate::common::{error_of, run};
use ns_diagnostic::ErrorCode;
use ns_ir::Span;
use ns_parse::ParseErrorKind;
use nsc::RunError;
use pretty_assertions::assert_eq;

#[test]
fn lex_error_prevents_all_evaluation() {
    let (result, output) = run("print(pair(none, nil))\nprint(pair(none, nil)) $");
    let Err(RunError::Lex(err)) = result else {
        panic!("expected a lex error, got {result:?}");
    };
    assert_eq!(err.found, '$');
    assert_eq!((err.line, err.column), (2, 24));
    assert_eq!(output, "");
}

#[test]
fn parse_error_after_earlier_statements_ran() {
    let (result, output) = run("print(pair(none, nil)) pair(none nil)");
    let Err(RunError::Parse(err)) = result else {
        panic!("expected a parse error, got {result:?}");
    };
    assert!(matches!(err.kind, ParseErrorKind::UnexpectedToken { .. }));
    assert_eq!(output, "0");
}

#[test]
fn unexpected_end_of_input() {
    let err = error_of("pair(none,");
    assert_eq!(err.category(), "ParseError");
    assert_eq!(err.to_diagnostic().code, ErrorCode::E1003);
}

#[test]
fn trailing_comma_is_rejected() {
    let err = error_of("list(none, nil,)");
    assert_eq!(err.to_diagnostic().code, ErrorCode::E1002);
}

#[test]
fn lex_error_diagnostic_points_at_character() {
    let err = error_of("none @");
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E0001);
    assert_eq!(diag.primary_span(), Some(Span::new(5, 6)));
}

#[test]
fn empty_program_has_no_result() {
    let (result, output) = run("  \n\t ");
    assert!(matches!(result, Ok(None)));
    assert_eq!(output, "");
}
