//! Command handlers for the Ilys CLI.

use ilys_lexer::tokenize;

/// Lex a file and display the token stream.
///
/// Tokens go to stdout in `KIND` / `KIND: text` form; recovery diagnostics
/// go to stderr. Returns the number of diagnostics so the caller can pick
/// an exit code.
pub fn lex_file(path: &str) -> usize {
    let content = read_file(path);
    let out = tokenize(&content);

    tracing::debug!(
        tokens = out.tokens.len(),
        diagnostics = out.diagnostics.len(),
        "lexed '{path}'"
    );

    println!("Tokens for '{}' ({} tokens):", path, out.tokens.len());
    for token in &out.tokens {
        println!("  {token}");
    }

    for diag in &out.diagnostics {
        eprintln!("{path}: {diag}");
    }

    out.diagnostics.len()
}

/// Read a file from disk, exiting with a user-friendly error message on failure.
fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
