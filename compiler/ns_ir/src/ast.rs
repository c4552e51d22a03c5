//! AST node types.
//!
//! Nodes live in an [`ExprArena`](crate::ExprArena) and refer to their
//! children by [`ExprId`]. Variable-length children (call arguments,
//! parameters, match arms) are stored as ranges into side tables.
//!
//! `list(...)` has no node of its own: the parser lowers it to nested
//! `Pair` nodes ending in a `nil` literal.

use std::fmt;

use crate::{Name, Span};

/// Index of an expression in its arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

macro_rules! define_range {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
        pub struct $name {
            pub start: u32,
            pub len: u16,
        }

        impl $name {
            pub const EMPTY: $name = $name { start: 0, len: 0 };

            #[inline]
            pub const fn new(start: u32, len: u16) -> Self {
                $name { start, len }
            }

            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }
        }
    };
}

define_range!(
    /// Range of expression ids (call arguments).
    ExprRange
);
define_range!(
    /// Range of function parameters.
    ParamRange
);
define_range!(
    /// Range of `case` arms of a match expression.
    ArmRange
);

/// The four payload-free value tags.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Sentinel {
    None,
    Nil,
    Undefined,
    Null,
}

impl Sentinel {
    /// Source keyword for this sentinel.
    pub const fn keyword(self) -> &'static str {
        match self {
            Sentinel::None => "none",
            Sentinel::Nil => "nil",
            Sentinel::Undefined => "undefined",
            Sentinel::Null => "null",
        }
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A function parameter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Param {
    pub name: Name,
    pub span: Span,
}

/// One `case pattern -> body` arm.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct MatchArm {
    pub pattern: ExprId,
    pub body: ExprId,
    pub span: Span,
}

/// An expression node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub const fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

/// Expression variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// `none`, `nil`, `undefined` or `null`.
    Literal(Sentinel),

    /// Variable reference.
    Ident(Name),

    /// `pair(car, cdr)`, also the lowering of `list(...)`.
    Pair { car: ExprId, cdr: ExprId },

    /// `func(args...)`.
    Call { func: ExprId, args: ExprRange },

    /// `function name(params...) { body }`.
    FunctionDef {
        name: Name,
        params: ParamRange,
        body: ExprId,
    },

    /// `if cond { then } else { otherwise }`.
    If {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: Option<ExprId>,
    },

    /// `match scrutinee { case p -> e ... default -> e }`.
    Match {
        scrutinee: ExprId,
        arms: ArmRange,
        default: Option<ExprId>,
    },
}
