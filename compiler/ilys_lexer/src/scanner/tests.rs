#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::tokenize;
use ilys_token::{Token, TokenKind};
use pretty_assertions::assert_eq;

/// Collapse a scan into (kind, text) pairs for terse assertions.
fn kinds(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source)
        .tokens
        .into_iter()
        .map(|t| (t.kind, t.text))
        .collect()
}

fn tok(kind: TokenKind, text: &str) -> (TokenKind, String) {
    (kind, text.to_string())
}

fn eof() -> (TokenKind, String) {
    tok(TokenKind::Eof, "EOF")
}

// === Terminal end-marker ===

#[test]
fn empty_input_yields_only_eof() {
    let out = tokenize("");
    assert_eq!(out.tokens, vec![Token::new(TokenKind::Eof, "EOF")]);
    assert!(out.diagnostics.is_empty());
}

#[test]
fn whitespace_only_input_yields_only_eof() {
    for source in [" ", "\t", "\n", "\r", " \t \r\n  "] {
        let out = tokenize(source);
        assert_eq!(out.tokens.len(), 1, "for {source:?}");
        assert_eq!(out.tokens[0].kind, TokenKind::Eof);
    }
}

#[test]
fn eof_is_last_and_unique() {
    let out = tokenize("let x = 1;");
    let eof_count = out
        .tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Eof)
        .count();
    assert_eq!(eof_count, 1);
    assert_eq!(out.tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
}

// === Priority ordering ===

#[test]
fn plus_plus_never_splits() {
    assert_eq!(kinds("++"), vec![tok(TokenKind::PlusPlus, "++"), eof()]);
}

#[test]
fn bare_plus_is_plus() {
    assert_eq!(kinds("+"), vec![tok(TokenKind::Plus, "+"), eof()]);
}

#[test]
fn plus_equals_never_splits() {
    assert_eq!(kinds("+="), vec![tok(TokenKind::PlusEq, "+="), eof()]);
}

#[test]
fn minus_family() {
    assert_eq!(kinds("--"), vec![tok(TokenKind::MinusMinus, "--"), eof()]);
    assert_eq!(kinds("-="), vec![tok(TokenKind::MinusEq, "-="), eof()]);
}

#[test]
fn comparison_compounds() {
    assert_eq!(kinds("=="), vec![tok(TokenKind::EqEq, "=="), eof()]);
    assert_eq!(kinds("!="), vec![tok(TokenKind::NotEq, "!="), eof()]);
    assert_eq!(kinds("<="), vec![tok(TokenKind::LtEq, "<="), eof()]);
    assert_eq!(kinds(">="), vec![tok(TokenKind::GtEq, ">="), eof()]);
    assert_eq!(kinds("="), vec![tok(TokenKind::Assign, "="), eof()]);
    assert_eq!(kinds("!"), vec![tok(TokenKind::Bang, "!"), eof()]);
    assert_eq!(kinds("<"), vec![tok(TokenKind::Lt, "<"), eof()]);
    assert_eq!(kinds(">"), vec![tok(TokenKind::Gt, ">"), eof()]);
}

#[test]
fn arithmetic_compound_assignments() {
    assert_eq!(kinds("*="), vec![tok(TokenKind::StarEq, "*="), eof()]);
    assert_eq!(kinds("/="), vec![tok(TokenKind::SlashEq, "/="), eof()]);
    assert_eq!(kinds("%="), vec![tok(TokenKind::PercentEq, "%="), eof()]);
}

// === Dot disambiguation ===

#[test]
fn double_dot_is_one_token() {
    assert_eq!(kinds(".."), vec![tok(TokenKind::DotDot, ".."), eof()]);
}

#[test]
fn single_dot_is_dot() {
    assert_eq!(kinds("."), vec![tok(TokenKind::Dot, "."), eof()]);
}

#[test]
fn range_expression() {
    assert_eq!(
        kinds("0..3"),
        vec![
            tok(TokenKind::Number, "0"),
            tok(TokenKind::DotDot, ".."),
            tok(TokenKind::Number, "3"),
            eof(),
        ]
    );
}

// === Numeric literals ===

#[test]
fn signed_decimal_is_trimmed() {
    assert_eq!(
        kinds("  -3.5 "),
        vec![tok(TokenKind::Number, "-3.5"), eof()]
    );
}

#[test]
fn plain_integer() {
    assert_eq!(kinds("42"), vec![tok(TokenKind::Number, "42"), eof()]);
}

#[test]
fn number_keeps_literal_spelling() {
    assert_eq!(kinds("+07.50"), vec![tok(TokenKind::Number, "+07.50"), eof()]);
}

#[test]
fn trailing_dot_is_not_a_fraction() {
    assert_eq!(
        kinds("5."),
        vec![tok(TokenKind::Number, "5"), tok(TokenKind::Dot, "."), eof()]
    );
}

// === Brackets and punctuation ===

#[test]
fn bracket_pairs() {
    assert_eq!(
        kinds("[]{}()"),
        vec![
            tok(TokenKind::LBracket, "["),
            tok(TokenKind::RBracket, "]"),
            tok(TokenKind::LBrace, "{"),
            tok(TokenKind::RBrace, "}"),
            tok(TokenKind::LParen, "("),
            tok(TokenKind::RParen, ")"),
            eof(),
        ]
    );
}

#[test]
fn punctuation() {
    assert_eq!(
        kinds(":;,?"),
        vec![
            tok(TokenKind::Colon, ":"),
            tok(TokenKind::Semicolon, ";"),
            tok(TokenKind::Comma, ","),
            tok(TokenKind::Question, "?"),
            eof(),
        ]
    );
}

// === Strings ===

#[test]
fn string_literal_drops_quotes() {
    assert_eq!(
        kinds("\"hello\""),
        vec![tok(TokenKind::Str, "hello"), eof()]
    );
}

#[test]
fn empty_string_literal() {
    assert_eq!(kinds("\"\""), vec![tok(TokenKind::Str, ""), eof()]);
}

#[test]
fn unterminated_string_recovers() {
    let out = tokenize("\"open");
    // The opening quote is skipped with a diagnostic; the tail lexes as a word.
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(out.diagnostics[0].position, 0);
    assert_eq!(out.diagnostics[0].found, '"');
    assert_eq!(
        out.tokens,
        vec![
            Token::new(TokenKind::Ident, "open"),
            Token::new(TokenKind::Eof, "EOF"),
        ]
    );
}

// === Identifiers and keywords ===

#[test]
fn keywords_resolve() {
    assert_eq!(
        kinds("let x = true;"),
        vec![
            tok(TokenKind::Let, "let"),
            tok(TokenKind::Ident, "x"),
            tok(TokenKind::Assign, "="),
            tok(TokenKind::True, "true"),
            tok(TokenKind::Semicolon, ";"),
            eof(),
        ]
    );
}

#[test]
fn keyword_prefix_stays_identifier() {
    assert_eq!(
        kinds("letter whiled iffy"),
        vec![
            tok(TokenKind::Ident, "letter"),
            tok(TokenKind::Ident, "whiled"),
            tok(TokenKind::Ident, "iffy"),
            eof(),
        ]
    );
}

#[test]
fn forevery_loop_header() {
    assert_eq!(
        kinds("forevery item in items"),
        vec![
            tok(TokenKind::ForEvery, "forevery"),
            tok(TokenKind::Ident, "item"),
            tok(TokenKind::In, "in"),
            tok(TokenKind::Ident, "items"),
            eof(),
        ]
    );
}

// === Full-grammar scenario ===

#[test]
fn condition_expression() {
    assert_eq!(
        kinds("a<=3&&b!=4"),
        vec![
            tok(TokenKind::Ident, "a"),
            tok(TokenKind::LtEq, "<="),
            tok(TokenKind::Number, "3"),
            tok(TokenKind::AmpAmp, "&&"),
            tok(TokenKind::Ident, "b"),
            tok(TokenKind::NotEq, "!="),
            tok(TokenKind::Number, "4"),
            eof(),
        ]
    );
}

#[test]
fn statement_with_braces() {
    assert_eq!(
        kinds("if (x >= 10) { x -= 1; }"),
        vec![
            tok(TokenKind::If, "if"),
            tok(TokenKind::LParen, "("),
            tok(TokenKind::Ident, "x"),
            tok(TokenKind::GtEq, ">="),
            tok(TokenKind::Number, "10"),
            tok(TokenKind::RParen, ")"),
            tok(TokenKind::LBrace, "{"),
            tok(TokenKind::Ident, "x"),
            tok(TokenKind::MinusEq, "-="),
            tok(TokenKind::Number, "1"),
            tok(TokenKind::Semicolon, ";"),
            tok(TokenKind::RBrace, "}"),
            eof(),
        ]
    );
}

// === Recovery ===

#[test]
fn unmatched_character_recovers() {
    let out = tokenize("@");
    assert_eq!(out.tokens, vec![Token::new(TokenKind::Eof, "EOF")]);
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(out.diagnostics[0].position, 0);
    assert_eq!(out.diagnostics[0].found, '@');
}

#[test]
fn scan_continues_past_unmatched_characters() {
    let out = tokenize("a @ b # c");
    assert_eq!(out.diagnostics.len(), 2);
    assert_eq!(out.diagnostics[0].found, '@');
    assert_eq!(out.diagnostics[1].found, '#');
    // The bad characters are absent, not represented as error tokens.
    assert_eq!(
        out.tokens,
        vec![
            Token::new(TokenKind::Ident, "a"),
            Token::new(TokenKind::Ident, "b"),
            Token::new(TokenKind::Ident, "c"),
            Token::new(TokenKind::Eof, "EOF"),
        ]
    );
}

#[test]
fn multibyte_unmatched_character_stays_on_char_boundary() {
    let out = tokenize("é1");
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(out.diagnostics[0].found, 'é');
    assert_eq!(
        out.tokens,
        vec![
            Token::new(TokenKind::Number, "1"),
            Token::new(TokenKind::Eof, "EOF"),
        ]
    );
}

// === Idempotence ===

#[test]
fn retokenizing_is_structurally_equal() {
    let source = "func add(a, b) { from a..b; return \"ok\"; }";
    let first = tokenize(source);
    let second = tokenize(source);
    assert_eq!(first.tokens, second.tokens);
    assert_eq!(first.diagnostics, second.diagnostics);
}

// === Property tests ===

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod properties {
    use crate::tokenize;
    use ilys_token::TokenKind;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn always_terminates_with_single_eof(source in ".*") {
            let out = tokenize(&source);
            let eofs = out
                .tokens
                .iter()
                .filter(|t| t.kind == TokenKind::Eof)
                .count();
            prop_assert_eq!(eofs, 1);
            prop_assert_eq!(out.tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
            prop_assert_eq!(out.tokens.last().map(|t| t.text.as_str()), Some("EOF"));
        }

        #[test]
        fn whitespace_only_sources_produce_no_tokens(
            source in proptest::collection::vec(
                prop_oneof![Just(' '), Just('\t'), Just('\n'), Just('\r')],
                0..64,
            )
        ) {
            let source: String = source.into_iter().collect();
            let out = tokenize(&source);
            prop_assert_eq!(out.tokens.len(), 1);
            prop_assert!(out.diagnostics.is_empty());
        }

        #[test]
        fn tokenize_is_deterministic(source in ".*") {
            let first = tokenize(&source);
            let second = tokenize(&source);
            prop_assert_eq!(first.tokens, second.tokens);
            prop_assert_eq!(first.diagnostics, second.diagnostics);
        }

        #[test]
        fn diagnostics_point_at_char_boundaries(source in ".*") {
            let out = tokenize(&source);
            for diag in &out.diagnostics {
                prop_assert!(source.is_char_boundary(diag.position));
                prop_assert_eq!(
                    source[diag.position..].chars().next(),
                    Some(diag.found)
                );
            }
        }
    }
}
