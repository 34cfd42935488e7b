//! Error recovery for the parser.
//!
//! After a statement fails to parse, the parser skips tokens until it has
//! just consumed a `;` or is looking at a token that safely starts the next
//! statement. Which tokens are safe depends on whether the parser is inside
//! a `for` body.

use minipl_ir::TokenKind;

use crate::cursor::Cursor;

/// A set of token kinds using bitset representation for O(1) membership testing.
///
/// Each bit in the u64 corresponds to a `TokenKind` discriminant index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u64);

const _: () = assert!(TokenKind::MAX_DISCRIMINANT < 64);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a token kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u64 << kind.discriminant_index()))
    }

    /// Union of two token sets.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(self, kind: TokenKind) -> bool {
        (self.0 & (1u64 << kind.discriminant_index())) != 0
    }
}

/// Keywords that are always safe places to resume.
const SIMPLE_STMT_START: TokenSet = TokenSet::new()
    .with(TokenKind::Print)
    .with(TokenKind::Read)
    .with(TokenKind::Assert)
    .with(TokenKind::EndOfFile);

/// Keywords that open a declaration or a loop.
const NESTING_STMT_START: TokenSet = TokenSet::new()
    .with(TokenKind::Var)
    .with(TokenKind::For);

/// Recovery set at top level.
pub const STMT_BOUNDARY: TokenSet = SIMPLE_STMT_START.union(NESTING_STMT_START);

/// Recovery set inside a `for` body.
///
/// `var` and `for` are left out so recovery does not walk out of the
/// enclosing loop's statement list. `end` is in, so the loop can close.
pub const LOOP_BODY_BOUNDARY: TokenSet = SIMPLE_STMT_START.with(TokenKind::End);

/// Skip tokens until just past a `;`, at a token in `recovery`, or at end
/// of file.
///
/// Always makes progress unless the cursor already sits on a recovery token,
/// so a caller that failed without consuming anything cannot loop forever.
pub fn synchronize(cursor: &mut Cursor<'_>, recovery: TokenSet) {
    if recovery.contains(cursor.current_kind()) {
        return;
    }
    cursor.advance();

    while !cursor.is_at_end() {
        if cursor
            .previous()
            .is_some_and(|t| t.kind == TokenKind::Semicolon)
        {
            return;
        }
        if recovery.contains(cursor.current_kind()) {
            return;
        }
        cursor.advance();
    }
}

#[cfg(test)]
mod tests;
