//! Runtime error types.
//!
//! Every runtime failure is an [`EvalError`] propagated up through the
//! evaluator. The host decides what to do with it: the file runner prints it
//! and exits, the REPL prints it and reads the next line.
//!
//! Factory functions (e.g. [`undefined_variable`]) are the public API; they
//! populate both `kind` and `message`.

use std::fmt;

use ns_diagnostic::{Diagnostic, ErrorCode};
use ns_ir::Span;

use crate::value::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    UndefinedVariable {
        name: String,
    },
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    TypeMismatch {
        /// The builtin that rejected the value.
        operation: &'static str,
        expected: &'static str,
        got: &'static str,
    },
    NotCallable {
        type_name: &'static str,
    },
    NonExhaustiveMatch,
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "undefined variable {name}"),
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(
                    f,
                    "argument count mismatch: {name} expects {expected} {arg_word}, got {got}"
                )
            }
            Self::TypeMismatch {
                operation,
                expected,
                got,
            } => write!(f, "{operation} needs a {expected}, got {got}"),
            Self::NotCallable { type_name } => {
                write!(f, "uncallable object: {type_name} is not callable")
            }
            Self::NonExhaustiveMatch => write!(f, "pattern matching failure"),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Always `kind.to_string()`.
    pub message: String,
    /// Source location where the error occurred, once known.
    pub span: Option<Span>,
    /// Definition of the user function involved, for arity errors.
    pub definition: Option<Span>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError {
            kind,
            message,
            span: None,
            definition: None,
        }
    }

    /// Attach a location unless one is already set.
    ///
    /// Errors are located as they propagate outward, so the innermost
    /// expression that knew its span wins.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }

    /// Point back at the definition of the function that was called.
    #[must_use]
    pub fn with_definition(mut self, span: Span) -> Self {
        self.definition = Some(span);
        self
    }

    /// Taxonomy name: `NameError`, `ArityError`, `TypeError` or `MatchError`.
    pub fn category(&self) -> &'static str {
        match self.kind {
            EvalErrorKind::UndefinedVariable { .. } => "NameError",
            EvalErrorKind::ArityMismatch { .. } => "ArityError",
            EvalErrorKind::TypeMismatch { .. } | EvalErrorKind::NotCallable { .. } => {
                "TypeError"
            }
            EvalErrorKind::NonExhaustiveMatch => "MatchError",
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            EvalErrorKind::UndefinedVariable { .. } => ErrorCode::E6020,
            EvalErrorKind::ArityMismatch { .. } => ErrorCode::E6030,
            EvalErrorKind::TypeMismatch { .. } => ErrorCode::E6010,
            EvalErrorKind::NotCallable { .. } => ErrorCode::E6032,
            EvalErrorKind::NonExhaustiveMatch => ErrorCode::E6040,
        }
    }

    /// Convert to a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code()).with_message(&self.message);
        if let Some(span) = self.span {
            let label = match &self.kind {
                EvalErrorKind::UndefinedVariable { .. } => "not found in this scope",
                EvalErrorKind::ArityMismatch { .. } => "called here",
                EvalErrorKind::TypeMismatch { .. } => "in this call",
                EvalErrorKind::NotCallable { .. } => "this is not a function",
                EvalErrorKind::NonExhaustiveMatch => "no case matched this value",
            };
            diag = diag.with_label(span, label);
        }
        if let Some(definition) = self.definition {
            diag = diag.with_secondary_label(definition, "function defined here");
        }
        match &self.kind {
            EvalErrorKind::UndefinedVariable { .. } => diag.with_note(
                "names are bound by function parameters, match cases and function definitions",
            ),
            EvalErrorKind::NonExhaustiveMatch => {
                diag.with_suggestion("add a `default -> ...` clause")
            }
            _ => diag,
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category(), self.message)
    }
}

impl std::error::Error for EvalError {}

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

/// `operation` was handed a value of the wrong type.
#[cold]
pub fn type_mismatch(operation: &'static str, expected: &'static str, got: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        operation,
        expected,
        got: got.type_name(),
    })
}

#[cold]
pub fn not_callable(value: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        type_name: value.type_name(),
    })
}

#[cold]
pub fn non_exhaustive_match() -> EvalError {
    EvalError::from_kind(EvalErrorKind::NonExhaustiveMatch)
}
