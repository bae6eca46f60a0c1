use miette::Diagnostic;
use thiserror::Error;

use crate::lexer::token::TokenKind;

/// A single lexical error, reported against a 1-based line number together
/// with the line text from the error position onwards.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SyntaxError {
    #[error("syntax error at line {line}: {text}")]
    #[diagnostic(
        code(lexscan::unknown_character),
        help("only A-Z, 0-9, + - / * = and whitespace may start a token")
    )]
    UnknownCharacter {
        line: usize,
        text: String,
        character: char,
    },

    #[error("syntax error at line {line}: {text}")]
    #[diagnostic(
        code(lexscan::unterminated_token),
        help("end the {kind} with a delimiter")
    )]
    UnterminatedToken {
        line: usize,
        text: String,
        kind: TokenKind,
    },
}

impl SyntaxError {
    pub fn line(&self) -> usize {
        match self {
            SyntaxError::UnknownCharacter { line, .. } | SyntaxError::UnterminatedToken { line, .. } => *line,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            SyntaxError::UnknownCharacter { text, .. } | SyntaxError::UnterminatedToken { text, .. } => text,
        }
    }
}
