//! Scanner for MiniPL using logos.
//!
//! [`lex`] turns source text into a token sequence that always ends with
//! exactly one `EndOfFile` token. Lexical errors are collected alongside the
//! tokens and scanning carries on past them, so one pass can surface every
//! bad character, unterminated string, and unterminated comment.
//!
//! Each token records the line it starts on. Lines are counted from every
//! `\n` in the source, including those inside strings and block comments.

mod escape;
mod lex_error;

use logos::Logos;
use minipl_ir::{Span, Token, TokenKind, Value};
use tracing::debug;

pub use lex_error::{LexError, LexErrorKind};

use escape::unescape_string;

/// Raw token from logos, before line tracking and keyword lookup.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r]+")] // Skip horizontal whitespace
enum RawToken {
    #[token("\n")]
    Newline,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    #[token("\"", string_literal)]
    String(String),

    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Int(i64),

    #[regex(r"[A-Za-z][A-Za-z0-9_]*")]
    Ident,

    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token(":")]
    Colon,
    #[token(":=")]
    Assign,
    #[token(";")]
    Semicolon,
    #[token("..")]
    DotDot,
    #[token(".")]
    Dot,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("<")]
    Less,
    #[token("=")]
    Equal,
    #[token("&")]
    Amp,
    #[token("!")]
    Bang,
}

/// Consume a possibly nested block comment after its opening `/*`.
///
/// Returns `false` when the input ends before every `/*` is closed.
fn block_comment(lex: &mut logos::Lexer<'_, RawToken>) -> bool {
    let rest = lex.remainder().as_bytes();
    let mut depth = 1usize;
    let mut i = 0;

    while i + 1 < rest.len() {
        match (rest[i], rest[i + 1]) {
            (b'/', b'*') => {
                depth += 1;
                i += 2;
            }
            (b'*', b'/') => {
                depth -= 1;
                i += 2;
                if depth == 0 {
                    lex.bump(i);
                    return true;
                }
            }
            _ => i += 1,
        }
    }

    lex.bump(rest.len());
    false
}

/// Consume a string literal after its opening quote, returning the decoded
/// body. Strings may span lines. `None` when no closing quote is found.
fn string_literal(lex: &mut logos::Lexer<'_, RawToken>) -> Option<String> {
    let rest = lex.remainder();
    let mut escaped = false;

    for (i, c) in rest.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => {
                lex.bump(i + 1);
                return Some(unescape_string(&rest[..i]));
            }
            _ => {}
        }
    }

    lex.bump(rest.len());
    None
}

/// Output of [`lex`].
#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct LexOutput {
    /// Tokens in source order, terminated by one `EndOfFile` token.
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Scan `source` into tokens.
#[tracing::instrument(level = "debug", skip_all)]
pub fn lex(source: &str) -> LexOutput {
    let mut output = LexOutput::default();
    let mut logos = RawToken::lexer(source);
    let mut line: u32 = 1;

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();
        let start_line = line;
        line = line.saturating_add(count_newlines(slice));

        match token_result {
            Ok(raw) => {
                if let Some(token) = convert_token(raw, start_line, slice, span, &mut output.errors)
                {
                    output.tokens.push(token);
                }
            }
            Err(()) => output
                .errors
                .push(LexError::from_unmatched(start_line, span, slice)),
        }
    }

    let eof_pos = u32::try_from(source.len()).unwrap_or(u32::MAX);
    output.tokens.push(Token::eof(line, eof_pos));

    debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "lexed"
    );
    output
}

fn count_newlines(slice: &str) -> u32 {
    let count = slice.bytes().filter(|&b| b == b'\n').count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Convert a raw token. Trivia yields `None`; so does a lone `.`, which is
/// recorded as an error instead.
fn convert_token(
    raw: RawToken,
    line: u32,
    slice: &str,
    span: Span,
    errors: &mut Vec<LexError>,
) -> Option<Token> {
    let kind = match raw {
        RawToken::Newline | RawToken::LineComment | RawToken::BlockComment => return None,
        RawToken::Dot => {
            errors.push(LexError::new(line, span, LexErrorKind::LoneDot));
            return None;
        }

        // Literals
        RawToken::String(body) => {
            return Some(
                Token::new(TokenKind::StringValue, line, slice, span).with_literal(Value::Str(body)),
            );
        }
        RawToken::Int(n) => {
            return Some(
                Token::new(TokenKind::IntValue, line, slice, span).with_literal(Value::Int(n)),
            );
        }
        RawToken::Ident => TokenKind::keyword(slice).unwrap_or(TokenKind::Identifier),

        // Punctuation
        RawToken::LeftParen => TokenKind::LeftParen,
        RawToken::RightParen => TokenKind::RightParen,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Assign => TokenKind::Assign,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::DotDot => TokenKind::DotDot,

        // Operators
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Less => TokenKind::Less,
        RawToken::Equal => TokenKind::Equal,
        RawToken::Amp => TokenKind::Amp,
        RawToken::Bang => TokenKind::Bang,
    };
    Some(Token::new(kind, line, slice, span))
}
