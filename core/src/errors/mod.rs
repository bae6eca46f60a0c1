mod syntax_error;

pub use syntax_error::SyntaxError;

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Failure of a whole scan. No tokens survive a failed scan.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("failed to scan source: {} syntax error(s)", .errors.len())]
pub struct ScanError {
    #[related]
    pub errors: Vec<SyntaxError>,
}

impl ScanError {
    pub fn new(errors: Vec<SyntaxError>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }
}

/// Unified error type for scanning a file from disk.
#[derive(Debug, Error, Diagnostic)]
pub enum LexError {
    #[error("could not read '{}'", .path.display())]
    #[diagnostic(code(lexscan::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Scan(#[from] ScanError),
}
