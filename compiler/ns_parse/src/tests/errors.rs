//! Parse error tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::parse_source;
use crate::{ErrorContext, ParseErrorKind};
use ns_diagnostic::ErrorCode;
use ns_ir::{RangeOverflow, Span, StringInterner, TokenKind};
use pretty_assertions::assert_eq;

#[test]
fn test_missing_comma_in_pair() {
    let interner = StringInterner::new();
    let err = parse_source("pair(nil nil)", &interner).unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: "`,`",
            found: TokenKind::Nil,
        }
    );
    assert_eq!(err.span, Span::new(9, 12));
    assert_eq!(err.context, Some(ErrorContext::PairLiteral));
    assert_eq!(err.code(), ErrorCode::E1001);
    assert_eq!(err.to_string(), "expected `,`, found `nil` while parsing a pair");
}

#[test]
fn test_unexpected_end_of_input() {
    let interner = StringInterner::new();
    let err = parse_source("f(nil", &interner).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEof { expected: "`)`" });
    assert_eq!(err.span, Span::point(5));
    assert_eq!(err.code(), ErrorCode::E1003);
}

#[test]
fn test_eof_where_expression_expected() {
    let interner = StringInterner::new();
    let err = parse_source("if", &interner).unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedEof {
            expected: "an expression"
        }
    );
    assert_eq!(err.context, Some(ErrorContext::IfExpression));
}

#[test]
fn test_expected_expression() {
    let interner = StringInterner::new();
    let err = parse_source("pair(->, nil)", &interner).unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::ExpectedExpression {
            found: TokenKind::Arrow
        }
    );
    assert_eq!(err.code(), ErrorCode::E1002);
}

#[test]
fn test_trailing_comma_is_rejected() {
    let interner = StringInterner::new();
    let err = parse_source("f(nil,)", &interner).unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::ExpectedExpression {
            found: TokenKind::RParen
        }
    );
    assert_eq!(err.context, Some(ErrorContext::FunctionCall));
    assert_eq!(
        err.to_diagnostic().suggestions,
        vec!["trailing commas are not allowed".to_string()]
    );
}

#[test]
fn test_function_definition_is_not_an_expression() {
    let interner = StringInterner::new();
    let err = parse_source("f(function g() { nil })", &interner).unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::ExpectedExpression {
            found: TokenKind::Function
        }
    );
}

#[test]
fn test_default_must_be_last() {
    let interner = StringInterner::new();
    let err = parse_source("match x { default -> nil case y -> y }", &interner).unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: "`}`",
            found: TokenKind::Case,
        }
    );
    assert_eq!(err.context, Some(ErrorContext::MatchExpression));
    assert_eq!(
        err.to_diagnostic().suggestions,
        vec!["`default` must be the last clause of a match".to_string()]
    );
}

#[test]
fn test_innermost_context_wins() {
    let interner = StringInterner::new();
    let err = parse_source("match x { case y nil }", &interner).unwrap_err();
    assert_eq!(err.context, Some(ErrorContext::MatchArm));
}

#[test]
fn test_parameter_must_be_identifier() {
    let interner = StringInterner::new();
    let err = parse_source("function f(nil) { nil }", &interner).unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: "a parameter name",
            found: TokenKind::Nil,
        }
    );
    assert_eq!(err.context, Some(ErrorContext::FunctionParams));
}

#[test]
fn test_keyword_cannot_name_a_function() {
    let interner = StringInterner::new();
    let err = parse_source("function list() { nil }", &interner).unwrap_err();
    assert_eq!(err.context, Some(ErrorContext::FunctionDef));
}

#[test]
fn test_too_many_arguments() {
    let interner = StringInterner::new();
    let count = RangeOverflow::MAX_ITEMS + 1;
    let args = vec!["nil"; count].join(",");
    let err = parse_source(&format!("f({args})"), &interner).unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::TooManyItems(RangeOverflow {
            what: "arguments",
            count,
            limit: RangeOverflow::MAX_ITEMS,
        })
    );
    assert_eq!(err.code(), ErrorCode::E1004);
}

#[test]
fn test_long_lists_are_not_limited() {
    let interner = StringInterner::new();
    let elements = vec!["none"; RangeOverflow::MAX_ITEMS + 10].join(",");
    assert!(parse_source(&format!("list({elements})"), &interner).is_ok());
}

#[test]
fn test_error_in_later_statement_fails_parse() {
    let interner = StringInterner::new();
    let err = parse_source("nil none )", &interner).unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::ExpectedExpression {
            found: TokenKind::RParen
        }
    );
    assert_eq!(err.to_diagnostic().suggestions, Vec::<String>::new());
}
