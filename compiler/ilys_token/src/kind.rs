//! The closed set of Ilys token kinds.
//!
//! Kinds are fieldless; the matched lexeme travels separately in
//! [`Token::text`](crate::Token). Display names come from
//! [`TokenKind::describe`] and are stable; diagnostic output and token
//! dumps key off them.

/// Token kinds for Ilys.
///
/// `Eof` is the terminal end-marker: exactly one is appended after the last
/// real token of every scan.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    Eof,

    LBracket,
    RBracket,
    LBrace,
    RBrace,
    LParen,
    RParen,

    Dot,
    DotDot,

    // Literals
    Number,
    Str,
    Ident,

    Assign, // =
    EqEq,   // ==
    Bang,   // !
    NotEq,  // !=

    AmpAmp,   // &&
    PipePipe, // ||
    Colon,
    Semicolon,
    Comma,
    Question,

    Lt,
    LtEq,
    Gt,
    GtEq,

    // Increment / decrement / compound assignment
    PlusPlus,
    PlusEq,
    MinusMinus,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,

    // Arithmetic operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Boolean literals
    True,
    False,

    // Keywords
    If,
    Else,
    From,
    Func,
    Let,
    Const,
    Typeof,
    New,
    Import,
    Export,
    Class,
    ForEvery,
    For,
    While,
    In,
}

impl TokenKind {
    /// Stable display name for diagnostics and token dumps.
    ///
    /// Total over the enumeration: the match is exhaustive, so adding a
    /// kind without a name is a compile error rather than a runtime hole.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::LBracket => "OPEN BRACKET",
            TokenKind::RBracket => "CLOSE BRACKET",
            TokenKind::LBrace => "OPEN CURLY BRACKET",
            TokenKind::RBrace => "CLOSE CURLY BRACKET",
            TokenKind::LParen => "OPEN PARENTHESIS",
            TokenKind::RParen => "CLOSE PARENTHESIS",
            TokenKind::Dot => "DOT",
            TokenKind::DotDot => "DOT DOT",
            TokenKind::Number => "NUMBER",
            TokenKind::Str => "STRING",
            TokenKind::Ident => "IDENTIFIER",
            TokenKind::Assign => "ASSIGNMENT",
            TokenKind::EqEq => "EQUALS",
            TokenKind::Bang => "NOT",
            TokenKind::NotEq => "NOT EQUALS",
            TokenKind::AmpAmp => "AND",
            TokenKind::PipePipe => "OR",
            TokenKind::Colon => "COLON",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Question => "QUESTION MARK",
            TokenKind::Lt => "LESS THAN",
            TokenKind::LtEq => "LESS THAN OR EQUAL TO",
            TokenKind::Gt => "GREATER THAN",
            TokenKind::GtEq => "GREATER THAN OR EQUAL TO",
            TokenKind::PlusPlus => "PLUS PLUS",
            TokenKind::PlusEq => "PLUS EQUALS",
            TokenKind::MinusMinus => "MINUS MINUS",
            TokenKind::MinusEq => "MINUS EQUALS",
            TokenKind::StarEq => "MULTIPLY EQUALS",
            TokenKind::SlashEq => "DIVIDE EQUALS",
            TokenKind::PercentEq => "MOD EQUALS",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "MULTIPLY",
            TokenKind::Slash => "DIVIDE",
            TokenKind::Percent => "MODULO",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::From => "FROM",
            TokenKind::Func => "FUNC",
            TokenKind::Let => "LET",
            TokenKind::Const => "CONST",
            TokenKind::Typeof => "TYPEOF",
            TokenKind::New => "NEW",
            TokenKind::Import => "IMPORT",
            TokenKind::Export => "EXPORT",
            TokenKind::Class => "CLASS",
            TokenKind::ForEvery => "FOR EACH",
            TokenKind::For => "FOR",
            TokenKind::While => "WHILE",
            TokenKind::In => "IN",
        }
    }

    /// Whether a printer should show the token's text alongside the kind.
    ///
    /// True only for the literal categories; every other kind has a fixed
    /// spelling that the kind name already conveys.
    #[inline]
    pub fn carries_text(self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::Str | TokenKind::Ident)
    }
}
