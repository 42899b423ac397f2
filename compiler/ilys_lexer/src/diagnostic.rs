//! Advisory diagnostics for lexical recovery.
//!
//! A diagnostic records a position the scanner had to skip because no rule
//! matched there. Diagnostics ride alongside the token sequence in
//! [`LexOutput`](crate::LexOutput); they are never interleaved with tokens
//! and never abort the scan.

use thiserror::Error;

/// A character no rule in the table accepted.
///
/// The scanner skips exactly one character per diagnostic and resumes, so a
/// source with N unmatched characters yields N of these and a complete
/// token sequence with those characters simply absent.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("no rule matched {found:?} at byte offset {position}")]
pub struct LexDiagnostic {
    /// Byte offset of the unmatched character in the source.
    pub position: usize,
    /// The character that was skipped.
    pub found: char,
}
