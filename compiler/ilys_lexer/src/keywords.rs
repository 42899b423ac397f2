//! Keyword resolution for matched words.
//!
//! The lookup uses the word's length as a first-pass filter (keywords range
//! from 2-8 chars), then matches against the specific keywords of that
//! length. Anything that misses the table is a plain identifier.

use ilys_token::TokenKind;

/// Look up a reserved keyword by text.
///
/// Returns the corresponding `TokenKind` if the text is a reserved keyword
/// or boolean literal, `None` if it's a regular identifier.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let len = text.len();

    // Guard: all keywords are 2-8 chars of lowercase ASCII
    if !(2..=8).contains(&len) {
        return None;
    }

    match len {
        2 => match text {
            "if" => Some(TokenKind::If),
            "in" => Some(TokenKind::In),
            _ => None,
        },
        3 => match text {
            "for" => Some(TokenKind::For),
            "let" => Some(TokenKind::Let),
            "new" => Some(TokenKind::New),
            _ => None,
        },
        4 => match text {
            "else" => Some(TokenKind::Else),
            "from" => Some(TokenKind::From),
            "func" => Some(TokenKind::Func),
            "true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match text {
            "class" => Some(TokenKind::Class),
            "const" => Some(TokenKind::Const),
            "false" => Some(TokenKind::False),
            "while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match text {
            "export" => Some(TokenKind::Export),
            "import" => Some(TokenKind::Import),
            "typeof" => Some(TokenKind::Typeof),
            _ => None,
        },
        8 => match text {
            "forevery" => Some(TokenKind::ForEvery),
            _ => None,
        },
        _ => None,
    }
}
