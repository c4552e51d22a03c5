//! Tree-walking interpreter.
//!
//! [`Interpreter::eval`] maps one AST node and an environment to one owned
//! value. Sub-evaluations propagate [`EvalError`](crate::EvalError) with `?`;
//! the first error unwinds to the caller, which picks the reporting policy.

mod builder;
mod function_call;
mod pattern;

pub use builder::InterpreterBuilder;

use ns_ir::{ExprId, ExprKind, Name, SharedArena, SharedInterner};
use ns_stack::ensure_sufficient_stack;

use crate::errors::{non_exhaustive_match, undefined_variable};
use crate::{Environment, EvalResult, SharedPrintHandler, Value};


/// Evaluator state shared by every call. Holds no per-run data, so one
/// interpreter can run any number of programs.
pub struct Interpreter {
    pub(crate) interner: SharedInterner,
    pub(crate) print: SharedPrintHandler,
    /// The wildcard pattern name `_`.
    pub(crate) underscore: Name,
}

impl Interpreter {
    /// An interpreter printing to stdout.
    pub fn new(interner: SharedInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print
    }

    /// A fresh top-level environment holding the builtins.
    pub fn global_environment(&self) -> Environment {
        crate::builtins::global_environment(&self.interner)
    }

    /// Evaluate the node `id` of `arena` in `env`.
    ///
    /// `arena` is the shared handle rather than a plain reference because
    /// function definitions keep it alive for their bodies.
    pub fn eval(&self, arena: &SharedArena, id: ExprId, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(arena, id, env))
    }

    fn eval_inner(&self, arena: &SharedArena, id: ExprId, env: &Environment) -> EvalResult {
        let expr = *arena.get_expr(id);
        match expr.kind {
            ExprKind::Literal(sentinel) => Ok(Value::from_sentinel(sentinel)),

            ExprKind::Ident(name) => env
                .lookup(name)
                .ok_or_else(|| undefined_variable(&self.interner.lookup(name)).with_span(expr.span)),

            ExprKind::Pair { car, cdr } => {
                let car = self.eval(arena, car, env)?;
                let cdr = self.eval(arena, cdr, env)?;
                Ok(Value::pair(car, cdr))
            }

            ExprKind::Call { func, args } => {
                let callee = self.eval(arena, func, env)?;
                let ids = arena.get_expr_list(args);
                let mut values = Vec::with_capacity(ids.len());
                for &arg in ids {
                    values.push(self.eval(arena, arg, env)?);
                }
                self.call(&callee, values)
                    .map_err(|err| err.with_span(expr.span))
            }

            ExprKind::FunctionDef { name, params, body } => {
                Ok(self.define_function(arena, name, params, body, expr.span, env))
            }

            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.eval(arena, cond, env)?.is_truthy() {
                    self.eval(arena, then_branch, env)
                } else if let Some(otherwise) = else_branch {
                    self.eval(arena, otherwise, env)
                } else {
                    Ok(Value::Nil)
                }
            }

            ExprKind::Match {
                scrutinee,
                arms,
                default,
            } => {
                let value = self.eval(arena, scrutinee, env)?;
                for (index, arm) in arena.get_arms(arms).iter().enumerate() {
                    let match_env = env.child();
                    if self.match_pattern(arena, arm.pattern, &value, &match_env)? {
                        tracing::trace!(arm = index, %value, "match arm selected");
                        return self.eval(arena, arm.body, &match_env);
                    }
                }
                match default {
                    Some(default) => {
                        tracing::trace!(%value, "match default selected");
                        self.eval(arena, default, env)
                    }
                    None => Err(non_exhaustive_match().with_span(expr.span)),
                }
            }
        }
    }
}
