//! Token types for the Ilys lexer.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact lexeme it was matched
//! from. Tokens are immutable once constructed and have no identity beyond
//! their position in the output sequence.

mod kind;

pub use kind::TokenKind;

use std::fmt;

/// A token: a kind plus the exact matched lexeme.
///
/// Numbers keep their literal spelling (including optional sign and
/// fractional part); structural tokens keep their fixed symbol.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    /// Construct a token. Pure and total: any kind/text pair is accepted.
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }
}

/// Renders `KIND: text` for literal-ish kinds and just `KIND` otherwise,
/// matching the token-dump format of the original compiler.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.carries_text() {
            write!(f, "{}: {}", self.kind.describe(), self.text)
        } else {
            f.write_str(self.kind.describe())
        }
    }
}
