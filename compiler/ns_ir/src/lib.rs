//! NullScript IR
//!
//! Core data structures shared by every phase of the interpreter:
//! - Spans for source locations
//! - Names for interned identifiers
//! - Tokens and `TokenList` for lexer output
//! - AST nodes stored in a flat, index-based arena
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers become `Name(u32)`
//! - **Flatten Everything**: no `Box<Expr>`, children are `ExprId(u32)` indices
//! - **Share, Don't Copy**: a parsed statement's arena is reference counted
//!   (`SharedArena`) so function values can keep their body alive

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod interner;
mod name;
mod span;
mod token;

pub use arena::{ExprArena, RangeOverflow, SharedArena};
pub use ast::{ArmRange, Expr, ExprId, ExprKind, ExprRange, MatchArm, Param, ParamRange, Sentinel};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
