//! NullScript CLI
//!
//! With a file argument, runs the file; with none, starts the REPL.

mod commands;

use std::sync::Once;

use commands::{lex_file, parse_file, run_file, start_repl};
use ns_diagnostic::emitter::ColorMode;

static TRACING_INIT: Once = Once::new();

/// Install a tree-shaped stderr subscriber when `RUST_LOG` is set.
///
/// Enable with e.g. `RUST_LOG=ns_eval=debug` or `RUST_LOG=ns_parse=trace`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

fn main() {
    init_tracing();

    let mut color = ColorMode::Auto;
    let mut args = Vec::new();
    for arg in std::env::args().skip(1) {
        if let Some(value) = arg.strip_prefix("--color=") {
            let Some(mode) = ColorMode::parse(value) else {
                eprintln!("error: invalid --color value '{value}' (expected auto, always or never)");
                std::process::exit(1);
            };
            color = mode;
        } else {
            args.push(arg);
        }
    }

    let Some(command) = args.first() else {
        start_repl(color);
        return;
    };

    match command.as_str() {
        "run" | "lex" | "parse" => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: nullscript {command} <file>");
                std::process::exit(1);
            };
            match command.as_str() {
                "run" => run_file(path, color),
                "lex" => lex_file(path, color),
                _ => parse_file(path, color),
            }
        }
        "repl" => start_repl(color),
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("NullScript {}", env!("CARGO_PKG_VERSION"));
        }
        _ if command.starts_with('-') => {
            eprintln!("Unknown option: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
        // Anything else is a path to run.
        path => run_file(path, color),
    }
}

fn print_usage() {
    println!("NullScript interpreter");
    println!();
    println!("Usage: nullscript [options] [command] [file]");
    println!();
    println!("Commands:");
    println!("  <file>              Run a NullScript program");
    println!("  run <file>          Run a NullScript program");
    println!("  repl                Start the REPL (default with no arguments)");
    println!("  lex <file>          Tokenize and display tokens");
    println!("  parse <file>        Parse and display the syntax tree");
    println!("  help                Show this help message");
    println!("  version             Show version information");
    println!();
    println!("Options:");
    println!("  --color=<mode>      Diagnostic colors: auto, always, never");
    println!();
    println!("Environment:");
    println!("  RUST_LOG            Enable internal tracing on stderr (e.g. ns_eval=debug)");
}
