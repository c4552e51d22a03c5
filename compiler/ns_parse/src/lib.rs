//! Recursive descent parser for NullScript.
//!
//! Statements are parsed one at a time, each into its own `ExprArena`, so
//! a caller can evaluate a statement before the next one is parsed. A parse
//! error ends the statement stream: there is no resynchronization.

mod cursor;
mod dump;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ErrorContext, ParseError, ParseErrorKind};

use ns_ir::{ExprArena, ExprId, SharedArena, StringInterner, TokenList};

/// One parsed top-level statement.
///
/// The arena is shared so that function values created while evaluating
/// the statement can keep their bodies alive.
#[derive(Clone, Debug)]
pub struct Statement {
    pub arena: SharedArena,
    pub root: ExprId,
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
    failed: bool,
}

impl<'a> Parser<'a> {
    /// Create a new parser.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            arena: ExprArena::new(),
            failed: false,
        }
    }

    /// Parse the next statement.
    ///
    /// Returns `None` at end of input, and after the first error.
    pub fn next_statement(&mut self) -> Option<Result<Statement, ParseError>> {
        if self.failed || self.cursor.is_at_end() {
            return None;
        }

        let start = self.cursor.current_span();
        match self.parse_statement() {
            Ok(root) => {
                let arena = SharedArena::new(std::mem::take(&mut self.arena));
                tracing::debug!(
                    span = ?start.merge(self.cursor.previous_span()),
                    nodes = arena.expr_count(),
                    "parsed statement"
                );
                Some(Ok(Statement { arena, root }))
            }
            Err(err) => {
                tracing::debug!(%err, "parse failed");
                self.failed = true;
                self.arena = ExprArena::new();
                Some(Err(err))
            }
        }
    }
}

impl Iterator for Parser<'_> {
    type Item = Result<Statement, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_statement()
    }
}

/// Parse every statement of a token list.
///
/// Fails on the first error; no statements are returned in that case.
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> Result<Vec<Statement>, ParseError> {
    Parser::new(tokens, interner).collect()
}

#[cfg(test)]
mod tests;
