//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, and consumption methods.

use ns_ir::{Name, Span, StringInterner, Token, TokenKind, TokenList};

use crate::ParseError;

/// Cursor for navigating tokens.
///
/// Invariant: the position always indexes a valid token, and the last
/// token of the list is `Eof`, so the cursor never runs off the end.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Cursor {
            tokens,
            interner,
            pos: 0,
        }
    }

    /// Get a reference to the string interner.
    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Get the current token.
    ///
    /// A list without the trailing `Eof` reads as if it had one.
    #[inline]
    pub fn current(&self) -> Token {
        self.tokens.get(self.pos).copied().unwrap_or_else(|| {
            let end = self.tokens.as_slice().last().map_or(0, |t| t.span.end);
            Token::new(TokenKind::Eof, Span::point(end))
        })
    }

    /// Get the current token's kind.
    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Get the current token's span.
    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Get the previous token's span.
    #[inline]
    pub fn previous_span(&self) -> Span {
        self.pos
            .checked_sub(1)
            .and_then(|prev| self.tokens.get(prev))
            .map_or(Span::DUMMY, |t| t.span)
    }

    /// Check if at end of token stream.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Check if the current token matches the given kind.
    ///
    /// Identifiers compare by kind only; the interned name is ignored.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        match (self.current_kind(), kind) {
            (TokenKind::Ident(_), TokenKind::Ident(_)) => true,
            (current, kind) => current == kind,
        }
    }

    /// Advance to the next token, returning the consumed one.
    ///
    /// Stays on `Eof` once it is reached.
    #[inline]
    pub fn advance(&mut self) -> Token {
        let token = self.current();
        if !self.is_at_end() {
            tracing::trace!(kind = ?token.kind, span = ?token.span, "consume");
            self.pos += 1;
        }
        token
    }

    /// Consume a token of the given kind or fail.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::unexpected(
                kind.display_name(),
                self.current_kind(),
                self.current_span(),
            ))
        }
    }

    /// Consume an identifier, returning its name and span.
    pub fn expect_ident(&mut self, expected: &'static str) -> Result<(Name, Span), ParseError> {
        match self.current_kind() {
            TokenKind::Ident(name) => {
                let span = self.advance().span;
                Ok((name, span))
            }
            found => Err(ParseError::unexpected(expected, found, self.current_span())),
        }
    }
}
