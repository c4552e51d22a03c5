//! Token types produced by the lexer.

use std::fmt;

use crate::{Name, Span};

/// A token with its kind and source span.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Token kinds.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Sentinel keywords
    None,
    Nil,
    Undefined,
    Null,

    // Structural keywords
    Function,
    If,
    Else,
    Match,
    Case,
    Default,
    Pair,
    List,

    /// Identifier (interned).
    Ident(Name),

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Arrow,

    /// End of input. Always the last token of a `TokenList`.
    Eof,
}

impl TokenKind {
    /// Human-readable name used in parse error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::None => "`none`",
            TokenKind::Nil => "`nil`",
            TokenKind::Undefined => "`undefined`",
            TokenKind::Null => "`null`",
            TokenKind::Function => "`function`",
            TokenKind::If => "`if`",
            TokenKind::Else => "`else`",
            TokenKind::Match => "`match`",
            TokenKind::Case => "`case`",
            TokenKind::Default => "`default`",
            TokenKind::Pair => "`pair`",
            TokenKind::List => "`list`",
            TokenKind::Ident(_) => "identifier",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Comma => "`,`",
            TokenKind::Arrow => "`->`",
            TokenKind::Eof => "end of input",
        }
    }

    /// Whether this kind is one of the twelve reserved words.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::None
                | TokenKind::Nil
                | TokenKind::Undefined
                | TokenKind::Null
                | TokenKind::Function
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Match
                | TokenKind::Case
                | TokenKind::Default
                | TokenKind::Pair
                | TokenKind::List
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Lexer output: every token of a source string, terminated by `Eof`.
#[derive(Clone, Default, Debug, Eq, PartialEq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with an estimated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
