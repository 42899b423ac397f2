//! The ordered rule table: matchers paired with semantic actions.
//!
//! Each rule recognizes a prefix of the remaining input anchored at the
//! scanner's cursor. Rules are tried in declared order and the scan commits
//! to the first success, so order is a first-class invariant: rules for
//! longer lexemes precede the rules for their single-character prefixes.
//!
//! Matchers are a small tagged union rather than a regex engine. First-match
//! semantics and prefix disambiguation stay explicit and testable this way.

use ilys_token::TokenKind;

/// Recognizes a prefix of the remaining input at the cursor.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Matcher {
    /// Fixed symbol. Declines when the byte immediately after the match is
    /// in `not_before`: the byte signals a longer compound lexeme starts
    /// here, and that compound's own rule must win instead.
    Symbol {
        text: &'static str,
        not_before: &'static [u8],
    },
    /// Maximal run of space, tab, carriage return, or newline.
    Whitespace,
    /// Numeric literal: optional leading whitespace run, optional sign,
    /// digits, optional fraction. The fraction dot is only taken when a
    /// digit follows it, so `0..3` leaves the range dots alone.
    Number,
    /// Double-quoted string. Fails (rather than matching) when the closing
    /// quote is missing, leaving the opening quote to no-match recovery.
    QuotedString,
    /// Identifier-shaped word: ASCII letter or `_`, then letters, digits,
    /// or `_`.
    Word,
}

impl Matcher {
    /// Length in bytes of the anchored match at the start of `rest`, or
    /// `None`. Never returns `Some(0)`.
    pub(crate) fn match_len(&self, rest: &str) -> Option<usize> {
        let bytes = rest.as_bytes();
        match *self {
            Matcher::Symbol { text, not_before } => {
                if !bytes.starts_with(text.as_bytes()) {
                    return None;
                }
                if let Some(&next) = bytes.get(text.len()) {
                    if not_before.contains(&next) {
                        return None;
                    }
                }
                Some(text.len())
            }
            Matcher::Whitespace => {
                let len = count_while(bytes, 0, is_whitespace);
                (len > 0).then_some(len)
            }
            Matcher::Number => {
                let mut i = count_while(bytes, 0, is_whitespace);
                if matches!(bytes.get(i), Some(b'+' | b'-')) {
                    i += 1;
                }
                let digits = count_while(bytes, i, |b| b.is_ascii_digit());
                if digits == 0 {
                    return None;
                }
                i += digits;
                // Fraction only when the dot is followed by a digit.
                if bytes.get(i) == Some(&b'.')
                    && bytes.get(i + 1).is_some_and(u8::is_ascii_digit)
                {
                    i += 1;
                    i += count_while(bytes, i, |b| b.is_ascii_digit());
                }
                Some(i)
            }
            Matcher::QuotedString => {
                if bytes.first() != Some(&b'"') {
                    return None;
                }
                let close = bytes[1..].iter().position(|&b| b == b'"')?;
                Some(close + 2)
            }
            Matcher::Word => {
                let first = bytes.first()?;
                if !first.is_ascii_alphabetic() && *first != b'_' {
                    return None;
                }
                Some(count_while(bytes, 1, |b| {
                    b.is_ascii_alphanumeric() || b == b'_'
                }) + 1)
            }
        }
    }
}

/// What to do with a successful match.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Action {
    /// Emit a token of the given kind carrying the matched symbol.
    Fixed(TokenKind),
    /// Emit the matched substring, trimmed of incidental surrounding
    /// whitespace when `trim` is set.
    Captured { kind: TokenKind, trim: bool },
    /// Emit the matched string literal minus its delimiting quotes.
    StringLit,
    /// Resolve the matched word against the keyword table, falling back to
    /// an identifier.
    Keyword,
    /// Consume the match without emitting a token.
    Skip,
}

/// One entry of the dispatch table.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Rule {
    pub(crate) matcher: Matcher,
    pub(crate) action: Action,
}

/// Fixed symbol with no compound continuation.
const fn sym(text: &'static str, kind: TokenKind) -> Rule {
    Rule {
        matcher: Matcher::Symbol {
            text,
            not_before: &[],
        },
        action: Action::Fixed(kind),
    }
}

/// Fixed symbol that is a strict prefix of one or more compound lexemes.
/// `not_before` lists the bytes that would continue a compound; the rule
/// declines in their presence and the compound's earlier rule emits the
/// longer token.
const fn guarded(text: &'static str, kind: TokenKind, not_before: &'static [u8]) -> Rule {
    Rule {
        matcher: Matcher::Symbol { text, not_before },
        action: Action::Fixed(kind),
    }
}

/// The fixed rule table, in priority order.
///
/// Number precedes the whitespace skip and the operator rules so a signed
/// numeral with incidental leading whitespace (`  -3.5`) is captured whole;
/// the capture action trims it back to a clean numeral. Every compound
/// symbol precedes its single-character prefix, and every prefix rule is
/// additionally guarded against the compound's continuation bytes.
pub(crate) fn rule_table() -> Vec<Rule> {
    vec![
        Rule {
            matcher: Matcher::Number,
            action: Action::Captured {
                kind: TokenKind::Number,
                trim: true,
            },
        },
        Rule {
            matcher: Matcher::Whitespace,
            action: Action::Skip,
        },
        Rule {
            matcher: Matcher::QuotedString,
            action: Action::StringLit,
        },
        Rule {
            matcher: Matcher::Word,
            action: Action::Keyword,
        },
        // Two-character compounds before their single-character prefixes.
        sym("..", TokenKind::DotDot),
        sym("==", TokenKind::EqEq),
        sym("!=", TokenKind::NotEq),
        sym("<=", TokenKind::LtEq),
        sym(">=", TokenKind::GtEq),
        sym("&&", TokenKind::AmpAmp),
        sym("||", TokenKind::PipePipe),
        sym("++", TokenKind::PlusPlus),
        sym("+=", TokenKind::PlusEq),
        sym("--", TokenKind::MinusMinus),
        sym("-=", TokenKind::MinusEq),
        sym("*=", TokenKind::StarEq),
        sym("/=", TokenKind::SlashEq),
        sym("%=", TokenKind::PercentEq),
        sym("[", TokenKind::LBracket),
        sym("]", TokenKind::RBracket),
        sym("{", TokenKind::LBrace),
        sym("}", TokenKind::RBrace),
        sym("(", TokenKind::LParen),
        sym(")", TokenKind::RParen),
        guarded(".", TokenKind::Dot, b"."),
        guarded("=", TokenKind::Assign, b"="),
        guarded("!", TokenKind::Bang, b"="),
        guarded("<", TokenKind::Lt, b"="),
        guarded(">", TokenKind::Gt, b"="),
        guarded("+", TokenKind::Plus, b"+="),
        guarded("-", TokenKind::Minus, b"-="),
        guarded("*", TokenKind::Star, b"="),
        guarded("/", TokenKind::Slash, b"="),
        guarded("%", TokenKind::Percent, b"="),
        sym(":", TokenKind::Colon),
        sym(";", TokenKind::Semicolon),
        sym(",", TokenKind::Comma),
        sym("?", TokenKind::Question),
    ]
}

#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Count consecutive bytes satisfying `pred`, starting at `from`.
fn count_while(bytes: &[u8], from: usize, pred: impl Fn(u8) -> bool) -> usize {
    bytes[from..].iter().take_while(|&&b| pred(b)).count()
}
