//! The scan loop: anchored first-match dispatch over the rule table.
//!
//! A [`Scanner`] is constructed per `tokenize` call, lives on the stack for
//! exactly that call, and is consumed by [`Scanner::run`]. The cursor
//! advances monotonically, by the match length on success (always >= 1)
//! or by one character on recovery, so the loop is structurally bounded by
//! the input length.

use ilys_token::{Token, TokenKind};

use crate::diagnostic::LexDiagnostic;
use crate::keywords;
use crate::rules::{rule_table, Action, Rule};
use crate::LexOutput;

/// One in-flight scan. Not shared: exactly one scan owns this state.
pub(crate) struct Scanner<'src> {
    source: &'src str,
    /// Byte offset into `source`. Invariant: `cursor <= source.len()` and
    /// always on a character boundary.
    cursor: usize,
    rules: Vec<Rule>,
    tokens: Vec<Token>,
    diagnostics: Vec<LexDiagnostic>,
}

impl<'src> Scanner<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Scanner {
            source,
            cursor: 0,
            rules: rule_table(),
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Drive the scan to completion and return the token sequence plus any
    /// recovery diagnostics. The sequence always ends with exactly one
    /// `Eof` token.
    pub(crate) fn run(mut self) -> LexOutput {
        while self.cursor < self.source.len() {
            if !self.step() {
                self.recover_unmatched();
            }
        }

        self.tokens.push(Token::new(TokenKind::Eof, "EOF"));
        LexOutput {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    /// Try the rules in declared order, anchored at the cursor. Commits to
    /// the first matcher that succeeds; returns false when none do.
    fn step(&mut self) -> bool {
        for idx in 0..self.rules.len() {
            if let Some(len) = self.rules[idx].matcher.match_len(self.rest()) {
                self.apply(self.rules[idx].action, len);
                return true;
            }
        }
        false
    }

    /// Run a rule's action over the matched span and advance past it.
    fn apply(&mut self, action: Action, len: usize) {
        let lexeme = &self.source[self.cursor..self.cursor + len];
        match action {
            Action::Fixed(kind) => self.tokens.push(Token::new(kind, lexeme)),
            Action::Captured { kind, trim } => {
                let text = if trim { lexeme.trim() } else { lexeme };
                self.tokens.push(Token::new(kind, text));
            }
            Action::StringLit => {
                // The matcher guarantees both delimiting quotes.
                self.tokens
                    .push(Token::new(TokenKind::Str, &lexeme[1..len - 1]));
            }
            Action::Keyword => {
                let kind = keywords::lookup(lexeme).unwrap_or(TokenKind::Ident);
                self.tokens.push(Token::new(kind, lexeme));
            }
            Action::Skip => {}
        }
        self.cursor += len;
    }

    /// No rule matched at the cursor: record a diagnostic, skip exactly one
    /// character, and resume. Never aborts the scan.
    fn recover_unmatched(&mut self) {
        // The loop guard ensures at least one character remains.
        let Some(found) = self.rest().chars().next() else {
            return;
        };
        tracing::warn!(
            position = self.cursor,
            character = %found,
            "no rule matched; skipping one character"
        );
        self.diagnostics.push(LexDiagnostic {
            position: self.cursor,
            found,
        });
        self.cursor += found.len_utf8();
    }

    /// The remaining input, anchored at the cursor. Empty at end of input
    /// rather than out of bounds.
    fn rest(&self) -> &'src str {
        self.source.get(self.cursor..).unwrap_or("")
    }
}

#[cfg(test)]
mod tests;
