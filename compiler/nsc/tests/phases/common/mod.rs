//! Shared helpers for phase tests.

use ns_eval::{buffer_handler, Value};
use nsc::{RunError, Session};

/// A session whose `print` output is captured.
pub fn session() -> Session {
    Session::with_print_handler(buffer_handler())
}

/// Run `source` in a fresh environment, returning the result and the
/// captured output.
pub fn run(source: &str) -> (Result<Option<Value>, RunError>, String) {
    let session = session();
    let result = session.run_fresh(source);
    (result, session.output())
}

/// Run `source`, which must succeed, and return its captured output.
pub fn output_of(source: &str) -> String {
    let (result, output) = run(source);
    if let Err(err) = result {
        panic!("unexpected error in {source:?}: {err}");
    }
    output
}

/// Run `source`, which must fail, and return the error.
pub fn error_of(source: &str) -> RunError {
    run(source).0.expect_err("program should fail")
}

/// Source for the unary numeral `n`.
pub fn numeral(n: usize) -> String {
    if n == 0 {
        "nil".to_string()
    } else {
        format!("list({})", vec!["none"; n].join(", "))
    }
}

/// Source for a `print` call writing the ASCII text `text`.
pub fn print_text(text: &str) -> String {
    text.bytes()
        .map(|b| format!("print(pair(undefined, {}))", numeral(usize::from(b))))
        .collect::<Vec<_>>()
        .join("\n")
}
