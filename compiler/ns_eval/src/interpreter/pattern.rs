//! Structural pattern matching for `match` arms.

use ns_ir::{ExprId, ExprKind, SharedArena};
use ns_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::{Environment, EvalError, Value};

impl Interpreter {
    /// Test `value` against the pattern node `pattern`.
    ///
    /// - a literal matches an equal sentinel
    /// - `_` matches anything and binds nothing
    /// - any other identifier matches anything and binds the value in
    ///   `match_env`
    /// - a pair matches a pair whose halves match, car first
    /// - any other node is evaluated in `match_env` and compared
    ///
    /// Bindings made before a failing sub-pattern stay in `match_env`; the
    /// caller discards the environment when the arm does not match.
    pub(super) fn match_pattern(
        &self,
        arena: &SharedArena,
        pattern: ExprId,
        value: &Value,
        match_env: &Environment,
    ) -> Result<bool, EvalError> {
        let (mut pattern, mut value) = (pattern, value);
        // Walk the cdr spine iteratively; only car sub-patterns recurse.
        loop {
            match arena.get_expr(pattern).kind {
                ExprKind::Literal(sentinel) => return Ok(value.as_sentinel() == Some(sentinel)),
                ExprKind::Ident(name) if name == self.underscore => return Ok(true),
                ExprKind::Ident(name) => {
                    match_env.define(name, value.clone());
                    return Ok(true);
                }
                ExprKind::Pair { car, cdr } => {
                    let Some(pair) = value.as_pair() else {
                        return Ok(false);
                    };
                    let car_matches = ensure_sufficient_stack(|| {
                        self.match_pattern(arena, car, pair.car(), match_env)
                    })?;
                    if !car_matches {
                        return Ok(false);
                    }
                    pattern = cdr;
                    value = pair.cdr();
                }
                _ => {
                    let expected = self.eval(arena, pattern, match_env)?;
                    return Ok(expected.values_equal(value));
                }
            }
        }
    }
}
