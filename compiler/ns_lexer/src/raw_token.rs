//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before
//! identifier interning and conversion to `TokenKind`.

use logos::Logos;

/// Raw token from logos (before interning).
///
/// Keywords are literal tokens, so they win over `Ident` on an exact match;
/// a longer word such as `nilly` is an identifier by longest match.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\x0B\x0C]+")]
pub(crate) enum RawToken {
    #[token("none")]
    None,
    #[token("nil")]
    Nil,
    #[token("undefined")]
    Undefined,
    #[token("null")]
    Null,
    #[token("function")]
    Function,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("match")]
    Match,
    #[token("case")]
    Case,
    #[token("default")]
    Default,
    #[token("pair")]
    Pair,
    #[token("list")]
    List,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token("->")]
    Arrow,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}
