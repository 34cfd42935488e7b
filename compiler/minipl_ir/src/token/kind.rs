//! Token kinds for MiniPL.

use std::fmt;

/// The lexical alphabet of MiniPL.
///
/// Fieldless so it stays `Copy`; literal payloads travel on
/// [`Token::literal`](super::Token::literal). The `u8` discriminant doubles as
/// a bit index for the parser's recovery sets.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TokenKind {
    // Punctuation
    LeftParen,
    RightParen,
    Colon,
    Assign,
    Semicolon,
    DotDot,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Less,
    Equal,
    Amp,
    Bang,

    // Literals
    IntValue,
    StringValue,
    Identifier,

    // Type keywords
    IntType,
    StringType,
    BoolType,

    // Statement keywords
    Var,
    Print,
    Read,
    Assert,
    For,
    In,
    Do,
    End,

    EndOfFile,
}

impl TokenKind {
    /// Largest discriminant value; recovery sets must be able to hold it.
    pub const MAX_DISCRIMINANT: u8 = TokenKind::EndOfFile as u8;

    /// Bit index used by token sets.
    #[inline]
    pub const fn discriminant_index(self) -> u8 {
        self as u8
    }

    /// Look up a reserved word.
    ///
    /// Returns `None` for anything that is an ordinary identifier.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        let kind = match text {
            "var" => TokenKind::Var,
            "print" => TokenKind::Print,
            "read" => TokenKind::Read,
            "assert" => TokenKind::Assert,
            "for" => TokenKind::For,
            "in" => TokenKind::In,
            "do" => TokenKind::Do,
            "end" => TokenKind::End,
            "int" => TokenKind::IntType,
            "string" => TokenKind::StringType,
            "bool" => TokenKind::BoolType,
            _ => return None,
        };
        Some(kind)
    }

    /// Human-readable name for error messages.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::Colon => ":",
            TokenKind::Assign => ":=",
            TokenKind::Semicolon => ";",
            TokenKind::DotDot => "..",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Less => "<",
            TokenKind::Equal => "=",
            TokenKind::Amp => "&",
            TokenKind::Bang => "!",
            TokenKind::IntValue => "integer",
            TokenKind::StringValue => "string literal",
            TokenKind::Identifier => "identifier",
            TokenKind::IntType => "int",
            TokenKind::StringType => "string",
            TokenKind::BoolType => "bool",
            TokenKind::Var => "var",
            TokenKind::Print => "print",
            TokenKind::Read => "read",
            TokenKind::Assert => "assert",
            TokenKind::For => "for",
            TokenKind::In => "in",
            TokenKind::Do => "do",
            TokenKind::End => "end",
            TokenKind::EndOfFile => "end of file",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
