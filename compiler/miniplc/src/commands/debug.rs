//! Debug commands: `lex` and `parse` for inspecting the front end.

use minipl_diagnostic::ColorMode;
use minipl_lexer::lex;
use minipl_parse::parse;

use super::{read_file, stderr_emitter};
use crate::ExitStatus;

/// Print the token stream, one token per line.
pub fn lex_file(path: &str, color: ColorMode) -> ExitStatus {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(status) => return status,
    };
    let lexed = lex(&source);

    println!("Tokens for '{}' ({} tokens):", path, lexed.tokens.len());
    for token in &lexed.tokens {
        println!("{token}");
    }

    let mut emitter = stderr_emitter(color);
    for error in &lexed.errors {
        emitter.emit(&error.to_diagnostic());
    }
    emitter.flush();

    if lexed.has_errors() {
        ExitStatus::SyntaxError
    } else {
        ExitStatus::Success
    }
}

/// Print the parsed statements in source-like form.
pub fn parse_file(path: &str, color: ColorMode) -> ExitStatus {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(status) => return status,
    };
    let lexed = lex(&source);
    let parsed = parse(&lexed.tokens);

    println!("Parse result for '{path}':");
    println!("  Statements: {}", parsed.statements.len());
    println!("  Errors: {}", lexed.errors.len() + parsed.errors.len());
    println!();
    for stmt in &parsed.statements {
        println!("{stmt}");
    }

    let mut emitter = stderr_emitter(color);
    for error in &lexed.errors {
        emitter.emit(&error.to_diagnostic());
    }
    for error in &parsed.errors {
        emitter.emit(&error.to_diagnostic());
    }
    emitter.flush();

    if lexed.has_errors() || parsed.has_errors() {
        ExitStatus::SyntaxError
    } else {
        ExitStatus::Success
    }
}
