//! NullScript driver.
//!
//! [`run`] is the single entry point: lex the whole source, then parse and
//! evaluate one statement at a time against a caller-supplied environment.
//! [`Session`] bundles the interner, print handler and interpreter that
//! `run` needs; the `nullscript` binary and the REPL are thin layers over it.

mod error;
pub mod repl;
mod session;

pub use error::RunError;
pub use session::Session;

use std::io::Write;

use ns_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use ns_eval::{Environment, Interpreter, Value};
use ns_parse::Parser;

/// Run `source` in `env`.
///
/// Returns the value of the last statement, or `None` if there were no
/// statements. A lexical error anywhere stops the run before anything is
/// evaluated; a parse error stops it after the statements before it have
/// run.
pub fn run(source: &str, env: &Environment, interp: &Interpreter) -> Result<Option<Value>, RunError> {
    let tokens = ns_lexer::lex(source, interp.interner())?;

    let mut last = None;
    let mut count = 0usize;
    for statement in Parser::new(&tokens, interp.interner()) {
        let statement = statement?;
        last = Some(interp.eval(&statement.arena, statement.root, env)?);
        count += 1;
    }
    tracing::debug!(statements = count, "run complete");
    Ok(last)
}

/// Render `err` as a diagnostic against `source`.
pub fn report_error<W: Write>(err: &RunError, source: &str, writer: W, mode: ColorMode, is_tty: bool) {
    let mut emitter = TerminalEmitter::with_color_mode(writer, mode, is_tty).with_source(source);
    emitter.emit(&err.to_diagnostic());
    emitter.flush();
}
