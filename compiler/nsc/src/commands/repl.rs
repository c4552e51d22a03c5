//! The interactive REPL on stdin/stdout.

use std::io::IsTerminal;

use ns_diagnostic::emitter::ColorMode;
use nsc::repl::run_repl;
use nsc::Session;

pub fn start_repl(color: ColorMode) {
    let session = Session::new();
    let stdout = std::io::stdout();
    let is_tty = stdout.is_terminal();
    // Not locked: `print` writes to stdout between prompts.
    if let Err(err) = run_repl(&session, std::io::stdin().lock(), stdout, color, is_tty) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
