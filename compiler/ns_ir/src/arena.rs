//! Arena allocation for the flat AST.
//!
//! - Contiguous storage for all expressions of one statement
//! - Child references are `ExprId` indices
//! - Variable-length children are ranges into side tables
//!
//! Side-table ranges carry a `u16` length, so a single call, parameter list
//! or match can hold at most `u16::MAX` items. Ids and range starts are
//! `u32`, so no table can grow past `u32::MAX` entries. Exceeding either
//! limit is reported as a [`RangeOverflow`] instead of wrapping.

use std::fmt;
use std::rc::Rc;

use crate::ast::{ArmRange, Expr, ExprId, ExprRange, MatchArm, Param, ParamRange};

/// A range or a whole table would exceed what its index type can address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeOverflow {
    /// Which list overflowed ("arguments", "parameters", "cases",
    /// "expressions").
    pub what: &'static str,
    /// How many items were supplied.
    pub count: usize,
    /// The largest count that fits.
    pub limit: usize,
}

impl RangeOverflow {
    /// Largest number of items a single range can hold.
    pub const MAX_ITEMS: usize = u16::MAX as usize;

    /// Largest number of entries a single table can hold.
    pub const MAX_ENTRIES: usize = u32::MAX as usize;
}

impl fmt::Display for RangeOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "too many {}: {} (maximum is {})",
            self.what, self.count, self.limit
        )
    }
}

impl std::error::Error for RangeOverflow {}

/// Contiguous storage for every node of one parsed statement.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct ExprArena {
    /// All expressions (indexed by `ExprId`).
    exprs: Vec<Expr>,
    /// Flattened call argument lists.
    expr_lists: Vec<ExprId>,
    /// All function parameters.
    params: Vec<Param>,
    /// All match arms.
    arms: Vec<MatchArm>,
}

/// Converts a table position into a `u32` index.
fn table_pos(what: &'static str, pos: usize) -> Result<u32, RangeOverflow> {
    u32::try_from(pos).map_err(|_| RangeOverflow {
        what,
        count: pos,
        limit: RangeOverflow::MAX_ENTRIES,
    })
}

fn range_len(what: &'static str, count: usize) -> Result<u16, RangeOverflow> {
    u16::try_from(count).map_err(|_| RangeOverflow {
        what,
        count,
        limit: RangeOverflow::MAX_ITEMS,
    })
}

/// Start and length for `count` new items appended to a table of
/// `table_len` entries. The end of the range must stay addressable too.
fn side_range(
    what: &'static str,
    table_len: usize,
    count: usize,
) -> Result<(u32, u16), RangeOverflow> {
    let len = range_len(what, count)?;
    table_pos(what, table_len + count)?;
    Ok((table_pos(what, table_len)?, len))
}

impl ExprArena {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate expression, return ID.
    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> Result<ExprId, RangeOverflow> {
        let id = ExprId::new(table_pos("expressions", self.exprs.len())?);
        self.exprs.push(expr);
        Ok(id)
    }

    /// Get expression by ID.
    ///
    /// # Panics
    /// Panics if `id` did not come from this arena.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Get number of expressions.
    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    /// Allocate a call argument list, return its range.
    pub fn alloc_expr_list(&mut self, exprs: Vec<ExprId>) -> Result<ExprRange, RangeOverflow> {
        let (start, len) = side_range("arguments", self.expr_lists.len(), exprs.len())?;
        self.expr_lists.extend(exprs);
        Ok(ExprRange::new(start, len))
    }

    /// Get expression list by range.
    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    /// Allocate a parameter list, return its range.
    pub fn alloc_params(&mut self, params: Vec<Param>) -> Result<ParamRange, RangeOverflow> {
        let (start, len) = side_range("parameters", self.params.len(), params.len())?;
        self.params.extend(params);
        Ok(ParamRange::new(start, len))
    }

    /// Get parameters by range.
    #[inline]
    pub fn get_params(&self, range: ParamRange) -> &[Param] {
        let start = range.start as usize;
        &self.params[start..start + range.len()]
    }

    /// Allocate the `case` arms of one match, return their range.
    pub fn alloc_arms(&mut self, arms: Vec<MatchArm>) -> Result<ArmRange, RangeOverflow> {
        let (start, len) = side_range("cases", self.arms.len(), arms.len())?;
        self.arms.extend(arms);
        Ok(ArmRange::new(start, len))
    }

    /// Get match arms by range.
    #[inline]
    pub fn get_arms(&self, range: ArmRange) -> &[MatchArm] {
        let start = range.start as usize;
        &self.arms[start..start + range.len()]
    }
}

/// Reference-counted handle to a finished arena.
///
/// Function values hold one of these next to their body `ExprId`, keeping
/// the nodes alive for as long as the function is reachable.
#[derive(Clone, Debug)]
pub struct SharedArena(Rc<ExprArena>);

impl SharedArena {
    /// Freeze an arena and share it.
    pub fn new(arena: ExprArena) -> Self {
        SharedArena(Rc::new(arena))
    }

    /// Whether two handles refer to the same arena.
    pub fn ptr_eq(&self, other: &SharedArena) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for SharedArena {
    type Target = ExprArena;

    fn deref(&self) -> &ExprArena {
        &self.0
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::{ExprKind, Name, Sentinel, Span};
    use pretty_assertions::assert_eq;

    fn literal(arena: &mut ExprArena, s: Sentinel) -> ExprId {
        arena.alloc_expr(Expr::new(ExprKind::Literal(s), Span::DUMMY)).unwrap()
    }

    #[test]
    fn test_alloc_and_get() {
        let mut arena = ExprArena::new();
        let none = literal(&mut arena, Sentinel::None);
        let nil = literal(&mut arena, Sentinel::Nil);
        assert_eq!(arena.expr_count(), 2);
        assert_eq!(arena.get_expr(none).kind, ExprKind::Literal(Sentinel::None));
        assert_eq!(arena.get_expr(nil).kind, ExprKind::Literal(Sentinel::Nil));
    }

    #[test]
    fn test_expr_lists_do_not_overlap() {
        let mut arena = ExprArena::new();
        let a = literal(&mut arena, Sentinel::None);
        let b = literal(&mut arena, Sentinel::Null);
        let first = arena.alloc_expr_list(vec![a, b]).unwrap_or_default();
        let second = arena.alloc_expr_list(vec![b]).unwrap_or_default();
        assert_eq!(arena.get_expr_list(first), &[a, b]);
        assert_eq!(arena.get_expr_list(second), &[b]);
        assert_eq!(arena.get_expr_list(ExprRange::EMPTY), &[] as &[ExprId]);
    }

    #[test]
    fn test_params_and_arms() {
        let mut arena = ExprArena::new();
        let params = vec![
            Param { name: Name::from_raw(1), span: Span::new(0, 1) },
            Param { name: Name::from_raw(2), span: Span::new(2, 3) },
        ];
        let range = arena.alloc_params(params.clone()).unwrap_or_default();
        assert_eq!(arena.get_params(range), params.as_slice());

        let p = literal(&mut arena, Sentinel::Nil);
        let arms = vec![MatchArm { pattern: p, body: p, span: Span::DUMMY }];
        let range = arena.alloc_arms(arms.clone()).unwrap_or_default();
        assert_eq!(arena.get_arms(range), arms.as_slice());
    }

    #[test]
    fn test_list_overflow_is_an_error() {
        let mut arena = ExprArena::new();
        let a = literal(&mut arena, Sentinel::None);
        let too_many = vec![a; RangeOverflow::MAX_ITEMS + 1];
        let err = arena.alloc_expr_list(too_many).err();
        assert_eq!(
            err,
            Some(RangeOverflow {
                what: "arguments",
                count: RangeOverflow::MAX_ITEMS + 1,
                limit: RangeOverflow::MAX_ITEMS,
            })
        );
        // Exactly at the limit still fits
        let at_limit = vec![a; RangeOverflow::MAX_ITEMS];
        assert!(arena.alloc_expr_list(at_limit).is_ok());
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_table_positions_past_u32_are_errors() {
        let past = RangeOverflow::MAX_ENTRIES + 1;
        assert_eq!(table_pos("expressions", RangeOverflow::MAX_ENTRIES), Ok(u32::MAX));
        assert_eq!(
            table_pos("expressions", past),
            Err(RangeOverflow {
                what: "expressions",
                count: past,
                limit: RangeOverflow::MAX_ENTRIES,
            })
        );
        // A range that starts in bounds but ends past the last index.
        assert_eq!(
            side_range("arguments", RangeOverflow::MAX_ENTRIES, 1).map_err(|e| e.limit),
            Err(RangeOverflow::MAX_ENTRIES)
        );
        assert_eq!(side_range("arguments", 10, 2), Ok((10, 2)));
    }

    #[test]
    fn test_overflow_message_names_the_limit() {
        let overflow = RangeOverflow {
            what: "cases",
            count: 70_000,
            limit: RangeOverflow::MAX_ITEMS,
        };
        assert_eq!(overflow.to_string(), "too many cases: 70000 (maximum is 65535)");
    }

    #[test]
    fn test_shared_arena_deref_and_identity() {
        let mut arena = ExprArena::new();
        literal(&mut arena, Sentinel::Undefined);
        let shared = SharedArena::new(arena);
        let other = shared.clone();
        assert!(shared.ptr_eq(&other));
        assert_eq!(other.expr_count(), 1);
    }
}
