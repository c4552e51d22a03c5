//! The `run` command: evaluate a NullScript source file.

use ns_diagnostic::emitter::ColorMode;
use nsc::Session;

use super::{read_file, report};

/// Run a file once in a fresh top-level environment.
///
/// Exits with status 1 after reporting the first lexical, parse or runtime
/// error.
pub fn run_file(path: &str, color: ColorMode) {
    let content = read_file(path);
    let session = Session::new();
    if let Err(err) = session.run_fresh(&content) {
        tracing::debug!(%err, path, "run failed");
        report(&err, &content, color);
        std::process::exit(1);
    }
}
