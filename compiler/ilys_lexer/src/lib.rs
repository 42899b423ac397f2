//! Lexer for the Ilys compiler.
//!
//! Converts raw source text into an ordered sequence of typed tokens by
//! driving an ordered (matcher, action) rule table over a cursor: at each
//! position the first rule whose matcher succeeds, anchored at the cursor,
//! commits, its action emits zero or one token, and the cursor advances by
//! the match length. The scan is greedy, non-backtracking, and single-pass.
//!
//! Lexical errors never fail the call. A character no rule accepts is
//! skipped with a [`LexDiagnostic`] recorded, and the scan resumes; the
//! returned sequence always ends with exactly one `Eof` token.
//!
//! ```
//! use ilys_lexer::tokenize;
//! use ilys_token::TokenKind;
//!
//! let out = tokenize("let x = 0..3;");
//! assert_eq!(out.tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//! assert!(out.diagnostics.is_empty());
//! ```

mod diagnostic;
mod keywords;
mod rules;
mod scanner;

pub use diagnostic::LexDiagnostic;
pub use ilys_token::{Token, TokenKind};

use scanner::Scanner;

/// Result of one scan: the token sequence plus any recovery diagnostics.
///
/// Diagnostics are advisory. They describe characters that were skipped,
/// which are absent from `tokens` rather than represented as error tokens.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<LexDiagnostic>,
}

impl LexOutput {
    /// Whether the scan consumed every character without recovery.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Tokenize `source` in full.
///
/// Pure: no I/O, no state across calls. The scanner value lives exactly as
/// long as this call. Always returns a sequence ending in `Eof`: malformed
/// input degrades to diagnostics, never to a failure value.
pub fn tokenize(source: &str) -> LexOutput {
    Scanner::new(source).run()
}
