//! Debug commands: `lex` and `parse` for inspecting the front end.

use ns_diagnostic::emitter::ColorMode;
use ns_diagnostic::span_utils::LineOffsetTable;
use ns_ir::{StringInterner, TokenKind};
use ns_parse::Parser;
use nsc::RunError;

use super::{read_file, report};

/// Lex a file and display the token stream.
pub fn lex_file(path: &str, color: ColorMode) {
    let content = read_file(path);
    let interner = StringInterner::new();
    let tokens = match ns_lexer::lex(&content, &interner) {
        Ok(tokens) => tokens,
        Err(err) => {
            report(&RunError::Lex(err), &content, color);
            std::process::exit(1);
        }
    };

    let lines = LineOffsetTable::build(&content);
    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    for tok in tokens.iter() {
        let (line, col) = lines.offset_to_line_col(&content, tok.span.start);
        match tok.kind {
            TokenKind::Ident(name) => {
                println!("  {line}:{col}  identifier `{}`", interner.lookup(name));
            }
            kind => println!("  {line}:{col}  {kind}"),
        }
    }
}

/// Parse a file and display each statement as an indented tree.
pub fn parse_file(path: &str, color: ColorMode) {
    let content = read_file(path);
    let interner = StringInterner::new();
    let tokens = match ns_lexer::lex(&content, &interner) {
        Ok(tokens) => tokens,
        Err(err) => {
            report(&RunError::Lex(err), &content, color);
            std::process::exit(1);
        }
    };

    println!("Parse result for '{path}':");
    for (index, statement) in Parser::new(&tokens, &interner).enumerate() {
        match statement {
            Ok(statement) => {
                println!();
                println!("Statement {} ({} nodes):", index + 1, statement.arena.expr_count());
                print!("{}", statement.dump(&interner));
            }
            Err(err) => {
                println!();
                report(&RunError::Parse(err), &content, color);
                std::process::exit(1);
            }
        }
    }
}
