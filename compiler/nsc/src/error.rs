//! The error returned by [`run`](crate::run).

use std::fmt;

use ns_diagnostic::Diagnostic;
use ns_eval::EvalError;
use ns_lexer::LexError;
use ns_parse::ParseError;

/// A failure in any phase of a run.
#[derive(Clone, Debug)]
pub enum RunError {
    Lex(LexError),
    Parse(ParseError),
    Eval(EvalError),
}

impl RunError {
    /// Taxonomy name: `LexError`, `ParseError`, or the runtime category.
    pub fn category(&self) -> &'static str {
        match self {
            RunError::Lex(_) => "LexError",
            RunError::Parse(_) => "ParseError",
            RunError::Eval(err) => err.category(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            RunError::Lex(err) => err.to_diagnostic(),
            RunError::Parse(err) => err.to_diagnostic(),
            RunError::Eval(err) => err.to_diagnostic(),
        }
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Lex(err) => write!(f, "LexError: {err}"),
            RunError::Parse(err) => write!(f, "ParseError: {err}"),
            RunError::Eval(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunError::Lex(err) => Some(err),
            RunError::Parse(err) => Some(err),
            RunError::Eval(err) => Some(err),
        }
    }
}

impl From<LexError> for RunError {
    fn from(err: LexError) -> Self {
        RunError::Lex(err)
    }
}

impl From<ParseError> for RunError {
    fn from(err: ParseError) -> Self {
        RunError::Parse(err)
    }
}

impl From<EvalError> for RunError {
    fn from(err: EvalError) -> Self {
        RunError::Eval(err)
    }
}
