//! Line-oriented read-eval loop.
//!
//! Each line is a complete program run in a brand-new top-level
//! environment; nothing carries over between lines. An error is reported
//! and the loop reads the next line.

use std::io::{self, BufRead, Write};

use ns_diagnostic::emitter::ColorMode;

use crate::{report_error, Session};

pub const BANNER: &str = "NullScript REPL";
pub const PROMPT: &str = "nullscript> ";

/// Read lines from `input` until `exit` or end of input.
///
/// The prompt and diagnostics go to `output`; program output goes to the
/// session's print handler.
pub fn run_repl<R: BufRead, W: Write>(
    session: &Session,
    mut input: R,
    mut output: W,
    color: ColorMode,
    is_tty: bool,
) -> io::Result<()> {
    writeln!(output, "{BANNER}")?;
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let source = line.trim_end_matches(['\n', '\r']);
        if source.is_empty() {
            continue;
        }
        if source == "exit" {
            break;
        }

        tracing::debug!(line = source, "repl input");
        if let Err(err) = session.run_fresh(source) {
            report_error(&err, source, &mut output, color, is_tty);
        }
    }
    Ok(())
}
