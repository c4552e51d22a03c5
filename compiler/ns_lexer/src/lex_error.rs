//! Lexer error type.
//!
//! NullScript has a single lexical failure: a character that cannot start
//! any token. The first one aborts lexing.

use std::fmt;

use ns_diagnostic::span_utils::LineOffsetTable;
use ns_diagnostic::{Diagnostic, ErrorCode};
use ns_ir::Span;


/// A character that starts no token.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    /// Byte range of the offending character.
    pub span: Span,
    /// 1-based line of `span.start`.
    pub line: u32,
    /// 1-based column (in characters) of `span.start`.
    pub column: u32,
    /// The offending character.
    pub found: char,
}

impl LexError {
    /// Build the error for the character at `span` in `source`.
    #[cold]
    pub fn unknown_character(source: &str, lines: &LineOffsetTable, span: Span) -> Self {
        let found = source
            .get(span.start as usize..)
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        let (line, column) = lines.offset_to_line_col(source, span.start);
        LexError {
            span,
            line,
            column,
            found,
        }
    }

    /// Convert to a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(ErrorCode::E0001)
            .with_message(format!("unknown character '{}'", self.found.escape_debug()))
            .with_label(self.span, "not part of any token")
            .with_note("NullScript source consists of keywords, identifiers, `( ) { } ,` and `->`")
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown character '{}' at line {}, column {}",
            self.found.escape_debug(),
            self.line,
            self.column
        )
    }
}

impl std::error::Error for LexError {}
