//! Parser tests.
//!
//! - `parser`: statements, expressions and the `list` lowering
//! - `errors`: error kinds, contexts and spans
//! - `dump`: tree rendering

mod errors;

use crate::{parse, ParseError, Statement};
use ns_ir::StringInterner;

/// Lex and parse `source`.
fn parse_source(source: &str, interner: &StringInterner) -> Result<Vec<Statement>, ParseError> {
    let tokens = ns_lexer::lex(source, interner).unwrap_or_else(|err| panic!("lex error: {err}"));
    parse(&tokens, interner)
}
