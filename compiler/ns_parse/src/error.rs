//! Parse error types.
//!
//! A parse error stops parsing of the current statement. It carries:
//! - What went wrong (`ParseErrorKind`)
//! - Where (`span`)
//! - What was being parsed (`ErrorContext`), for "while parsing X" messages

use std::fmt;

use ns_diagnostic::{Diagnostic, ErrorCode};
use ns_ir::{RangeOverflow, Span, TokenKind};

/// Context describing what was being parsed when an error occurred.
///
/// The innermost context wins: once set, enclosing rules leave it alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    FunctionDef,
    FunctionParams,
    IfExpression,
    MatchExpression,
    MatchArm,
    FunctionCall,
    PairLiteral,
    ListLiteral,
    Parenthesized,
}

impl ErrorContext {
    /// Returns a phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::FunctionDef => "a function definition",
            Self::FunctionParams => "function parameters",
            Self::IfExpression => "an if expression",
            Self::MatchExpression => "a match expression",
            Self::MatchArm => "a match case",
            Self::FunctionCall => "a function call",
            Self::PairLiteral => "a pair",
            Self::ListLiteral => "a list",
            Self::Parenthesized => "a parenthesized expression",
        }
    }
}

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Expected a specific token, found something else.
    UnexpectedToken {
        /// Description of what was expected.
        expected: &'static str,
        /// The token that was found.
        found: TokenKind,
    },

    /// Expected the start of an expression.
    ExpectedExpression { found: TokenKind },

    /// Input ended in the middle of a statement.
    UnexpectedEof { expected: &'static str },

    /// An argument, parameter or case list does not fit the AST ranges.
    TooManyItems(RangeOverflow),
}

/// A fatal error for the statement being parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub context: Option<ErrorContext>,
}

impl ParseError {
    /// Expected `expected`, found `found`.
    ///
    /// Running into `Eof` becomes [`ParseErrorKind::UnexpectedEof`].
    #[cold]
    pub fn unexpected(expected: &'static str, found: TokenKind, span: Span) -> Self {
        let kind = if found == TokenKind::Eof {
            ParseErrorKind::UnexpectedEof { expected }
        } else {
            ParseErrorKind::UnexpectedToken { expected, found }
        };
        ParseError {
            kind,
            span,
            context: None,
        }
    }

    /// No expression can start with `found`.
    #[cold]
    pub fn expected_expression(found: TokenKind, span: Span) -> Self {
        if found == TokenKind::Eof {
            return Self::unexpected("an expression", found, span);
        }
        ParseError {
            kind: ParseErrorKind::ExpectedExpression { found },
            span,
            context: None,
        }
    }

    /// A list grew past what a single AST range can hold.
    #[cold]
    pub fn too_many_items(overflow: RangeOverflow, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::TooManyItems(overflow),
            span,
            context: None,
        }
    }

    /// Attach `context` unless an inner rule already did.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context.get_or_insert(context);
        self
    }

    /// The error code for this kind.
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::ExpectedExpression { .. } => ErrorCode::E1002,
            ParseErrorKind::UnexpectedEof { .. } => ErrorCode::E1003,
            ParseErrorKind::TooManyItems(_) => ErrorCode::E1004,
        }
    }

    /// Convert to a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, .. }
            | ParseErrorKind::UnexpectedEof { expected } => format!("expected {expected}"),
            ParseErrorKind::ExpectedExpression { .. } => "expected an expression".to_owned(),
            ParseErrorKind::TooManyItems(overflow) => format!("too many {}", overflow.what),
        };
        let mut diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label(self.span, label);
        if let Some(hint) = self.hint() {
            diag = diag.with_suggestion(hint);
        }
        diag
    }

    fn hint(&self) -> Option<&'static str> {
        match self.kind {
            ParseErrorKind::ExpectedExpression {
                found: TokenKind::Function,
            } => Some("functions can only be defined at the start of a statement"),
            ParseErrorKind::UnexpectedToken {
                found: TokenKind::Case,
                ..
            } if self.context == Some(ErrorContext::MatchExpression) => {
                Some("`default` must be the last clause of a match")
            }
            ParseErrorKind::ExpectedExpression {
                found: TokenKind::RParen,
            } if matches!(
                self.context,
                Some(ErrorContext::FunctionCall | ErrorContext::ListLiteral)
            ) =>
            {
                Some("trailing commas are not allowed")
            }
            _ => None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, found } => {
                write!(f, "expected {expected}, found {found}")?;
            }
            ParseErrorKind::ExpectedExpression { found } => {
                write!(f, "expected an expression, found {found}")?;
            }
            ParseErrorKind::UnexpectedEof { expected } => {
                write!(f, "unexpected end of input, expected {expected}")?;
            }
            ParseErrorKind::TooManyItems(overflow) => write!(f, "{overflow}")?,
        }
        if let Some(context) = self.context {
            write!(f, " while parsing {}", context.description())?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}
