pub mod errors;
pub mod lexer;

pub use errors::{LexError, ScanError, SyntaxError};
pub use lexer::token::{Token, TokenKind, TokenSet};
pub use lexer::{lex, lex_lines, lex_path};
