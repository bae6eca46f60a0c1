pub mod classifier;
pub mod cursor;
pub mod pending;
pub mod scanner;
pub mod state;
pub mod token;

use std::fs;
use std::path::Path;

use crate::errors::{LexError, ScanError};
use token::TokenSet;

/// Tokenize source text. Lines keep their terminators, which the scanner
/// strips as delimiters.
pub fn lex(source: &str) -> Result<TokenSet, ScanError> {
    lex_lines(source.split_inclusive('\n'))
}

/// Tokenize a document that has already been split into lines.
pub fn lex_lines<'a, I>(lines: I) -> Result<TokenSet, ScanError>
where
    I: IntoIterator<Item = &'a str>,
{
    scanner::Scanner::new().scan_lines(lines)
}

/// Read a file in full and tokenize it.
pub fn lex_path(path: impl AsRef<Path>) -> Result<TokenSet, LexError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LexError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(lex(&source)?)
}
