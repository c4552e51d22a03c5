//! The read-eval loop over in-memory input.

use crate::common::{numeral, session};
use ns_diagnostic::emitter::ColorMode;
use nsc::repl::{run_repl, BANNER, PROMPT};
use pretty_assertions::assert_eq;

/// Feed `input` to a REPL; returns (terminal text, program output).
fn repl(input: &str) -> (String, String) {
    let session = session();
    let mut terminal = Vec::new();
    run_repl(&session, input.as_bytes(), &mut terminal, ColorMode::Never, false).unwrap();
    (String::from_utf8(terminal).unwrap(), session.output())
}

#[test]
fn banner_and_prompt_until_eof() {
    let (terminal, output) = repl("");
    assert_eq!(terminal, format!("{BANNER}\n{PROMPT}"));
    assert_eq!(output, "");
}

#[test]
fn runs_each_line() {
    let input = format!(
        "print(pair(none, {}))\nprint(pair(null, nil))\n",
        numeral(2)
    );
    let (terminal, output) = repl(&input);
    assert_eq!(output, "2nil");
    assert_eq!(terminal.matches(PROMPT).count(), 3);
}

#[test]
fn exit_stops_reading() {
    let (terminal, output) = repl("print(pair(none, nil))\nexit\nprint(pair(none, nil))\n");
    assert_eq!(output, "0");
    assert_eq!(terminal.matches(PROMPT).count(), 2);
}

#[test]
fn blank_lines_and_carriage_returns_are_skipped() {
    let (_, output) = repl("\n\r\nprint(pair(null, none))\r\nexit\r\n");
    assert_eq!(output, "none");
}

#[test]
fn errors_are_reported_and_loop_continues() {
    let (terminal, output) = repl("car(none)\nprint(pair(null, null))\n");
    assert!(terminal.contains("error[E6010]: car needs a pair, got none"), "got:\n{terminal}");
    assert_eq!(output, "null");
}

#[test]
fn no_state_persists_between_lines() {
    let (terminal, _) = repl("function f() { none }\nf()\n");
    assert!(terminal.contains("error[E6020]: undefined variable f"), "got:\n{terminal}");
}
