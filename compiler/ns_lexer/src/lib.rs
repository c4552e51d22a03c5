//! Lexer for NullScript using logos with identifier interning.
//!
//! Whitespace, including newlines, is skipped. The first character that
//! cannot start a token aborts lexing with a [`LexError`]; no partial token
//! list is returned.

mod lex_error;
mod raw_token;

use logos::Logos;
use ns_diagnostic::span_utils::LineOffsetTable;
use ns_ir::{Span, StringInterner, Token, TokenKind, TokenList};

pub use lex_error::LexError;
use raw_token::RawToken;

/// Lex source code into a `TokenList` terminated by `Eof`.
pub fn lex(source: &str, interner: &StringInterner) -> Result<TokenList, LexError> {
    let mut result = TokenList::with_capacity(source.len() / 2 + 1);
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        match token_result {
            Ok(raw) => {
                let kind = convert_token(raw, logos.slice(), interner);
                result.push(Token::new(kind, span));
            }
            Err(()) => {
                let err = LexError::unknown_character(source, &LineOffsetTable::build(source), span);
                tracing::debug!(%err, "lexing aborted");
                return Err(err);
            }
        }
    }

    let eof_pos = u32::try_from(source.len()).unwrap_or(u32::MAX);
    result.push(Token::new(TokenKind::Eof, Span::point(eof_pos)));

    tracing::debug!(tokens = result.len(), bytes = source.len(), "lexed source");
    Ok(result)
}

/// Convert a raw token to a `TokenKind`, interning identifiers.
fn convert_token(raw: RawToken, slice: &str, interner: &StringInterner) -> TokenKind {
    match raw {
        RawToken::None => TokenKind::None,
        RawToken::Nil => TokenKind::Nil,
        RawToken::Undefined => TokenKind::Undefined,
        RawToken::Null => TokenKind::Null,
        RawToken::Function => TokenKind::Function,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::Match => TokenKind::Match,
        RawToken::Case => TokenKind::Case,
        RawToken::Default => TokenKind::Default,
        RawToken::Pair => TokenKind::Pair,
        RawToken::List => TokenKind::List,

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Arrow => TokenKind::Arrow,

        RawToken::Ident => {
            tracing::trace!(ident = slice, "identifier");
            TokenKind::Ident(interner.intern(slice))
        }
    }
}
