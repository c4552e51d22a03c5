//! A configured interpreter plus the state shared across runs.

use ns_eval::{stdout_handler, Environment, Interpreter, InterpreterBuilder, SharedPrintHandler, Value};
use ns_ir::SharedInterner;

use crate::{run, RunError};

/// Interner, print handler and interpreter for a sequence of runs.
///
/// A session keeps no bindings between runs: every run gets the environment
/// its caller passes, usually a fresh one from [`Session::fresh_environment`].
pub struct Session {
    interpreter: Interpreter,
}

impl Session {
    /// A session printing to stdout.
    pub fn new() -> Self {
        Self::with_print_handler(stdout_handler())
    }

    /// A session whose `print` output goes to `handler`.
    pub fn with_print_handler(handler: SharedPrintHandler) -> Self {
        let interpreter = InterpreterBuilder::new(SharedInterner::new())
            .print_handler(handler)
            .build();
        Session { interpreter }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn interner(&self) -> &SharedInterner {
        self.interpreter.interner()
    }

    /// Output captured by the print handler; empty when printing to stdout.
    pub fn output(&self) -> String {
        self.interpreter.print_handler().get_output()
    }

    /// A new top-level environment holding only the builtins.
    pub fn fresh_environment(&self) -> Environment {
        self.interpreter.global_environment()
    }

    /// Run `source` in `env`.
    pub fn run_in(&self, source: &str, env: &Environment) -> Result<Option<Value>, RunError> {
        run(source, env, &self.interpreter)
    }

    /// Run `source` once in a fresh top-level environment.
    pub fn run_fresh(&self, source: &str) -> Result<Option<Value>, RunError> {
        let env = self.fresh_environment();
        self.run_in(source, &env)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
