//! Command handlers for the `nullscript` CLI.
//!
//! Handlers print their own output and terminate the process with a non-zero
//! status on failure. Shared helpers live here in the module root.

use std::io::IsTerminal;

use ns_diagnostic::emitter::ColorMode;
use nsc::{report_error, RunError};

mod debug;
mod repl;
mod run;

pub use debug::{lex_file, parse_file};
pub use repl::start_repl;
pub use run::run_file;

/// Read a source file, or print an error and exit with status 1.
pub(super) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("file not found: {path}"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            println!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Print `err` to stdout as a diagnostic against `source`.
pub(super) fn report(err: &RunError, source: &str, color: ColorMode) {
    let stdout = std::io::stdout();
    let is_tty = stdout.is_terminal();
    report_error(err, source, stdout, color, is_tty);
}
