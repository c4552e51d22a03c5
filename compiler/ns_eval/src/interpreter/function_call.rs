//! Function definition and call evaluation.

use ns_ir::{ExprId, Name, ParamRange, SharedArena, Span};

use super::Interpreter;
use crate::errors::{arity_mismatch, not_callable};
use crate::value::{FunctionProto, FunctionValue};
use crate::{Environment, EvalResult, Value};

impl Interpreter {
    /// Call `callee` with already-evaluated arguments.
    pub fn call(&self, callee: &Value, args: Vec<Value>) -> EvalResult {
        match callee {
            Value::Builtin(builtin) => {
                tracing::debug!(name = builtin.name, args = args.len(), "builtin call");
                (builtin.func)(&args, &self.print)
            }
            Value::Function(func) => self.call_function(func, args),
            other => Err(not_callable(other)),
        }
    }

    /// Bind the arguments in a child of the closure and evaluate the body.
    #[tracing::instrument(level = "debug", skip_all, fields(name = %self.interner.lookup(func.proto.name)))]
    fn call_function(&self, func: &FunctionValue, args: Vec<Value>) -> EvalResult {
        let proto = &func.proto;
        if args.len() != proto.params.len() {
            return Err(arity_mismatch(
                &self.interner.lookup(proto.name),
                proto.params.len(),
                args.len(),
            )
            .with_definition(proto.span));
        }

        let call_env = func.closure.child();
        for (&param, arg) in proto.params.iter().zip(args) {
            call_env.define(param, arg);
        }
        self.eval(&proto.arena, proto.body, &call_env)
    }

    /// Evaluate `function name(params) { body }` in `env`.
    ///
    /// The name is bound in `env` itself so the body can call it; the
    /// definition evaluates to the function.
    pub(super) fn define_function(
        &self,
        arena: &SharedArena,
        name: Name,
        params: ParamRange,
        body: ExprId,
        span: Span,
        env: &Environment,
    ) -> Value {
        let params = arena.get_params(params).iter().map(|p| p.name).collect();
        let proto = FunctionProto::new(name, params, body, arena.clone(), span);
        tracing::debug!(name = %self.interner.lookup(name), "define function");
        env.define_function(proto.clone());
        Value::function(proto, env.clone())
    }
}
