//! Tree-walking evaluator for NullScript.
//!
//! # Architecture
//!
//! - [`Value`]: sentinels, pairs, functions and builtins, reference counted
//! - [`Environment`]: chained scopes; closures capture them by handle
//! - [`Interpreter`]: evaluates AST nodes, calls functions, matches patterns
//! - [`builtins`]: `eq`, `car`, `cdr`, `print`
//!
//! Output from `print` goes through a [`SharedPrintHandler`], so hosts can
//! capture it instead of writing to stdout.

pub mod builtins;
mod environment;
pub mod errors;
mod interpreter;
mod print_handler;
mod value;

pub use environment::{Binding, Environment, LocalScope, Scope, WeakEnvironment};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};
pub use value::{BuiltinFn, BuiltinValue, FunctionProto, FunctionValue, Heap, PairValue, Value};
