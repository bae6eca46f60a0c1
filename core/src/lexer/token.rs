use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

/// A classified lexical unit. Two tokens are the same token when both the
/// kind and the text match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:?}", self.kind, self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Identifier,
    Number,
    Operator,
    Attribution,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::Operator => "operator",
            TokenKind::Attribution => "attribution",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deduplicating token collector.
///
/// Iteration yields tokens in the order they were first inserted. That order
/// is a convenience for deterministic output and is not part of the contract:
/// callers should treat the collection as a set.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct TokenSet {
    tokens: Vec<Token>,
    #[serde(skip)]
    seen: HashSet<Token>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a token, returning `false` if an equal token was already present.
    pub fn insert(&mut self, token: Token) -> bool {
        if self.seen.contains(&token) {
            return false;
        }
        self.seen.insert(token.clone());
        self.tokens.push(token);
        true
    }

    pub fn contains(&self, token: &Token) -> bool {
        self.seen.contains(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl PartialEq for TokenSet {
    fn eq(&self, other: &Self) -> bool {
        self.seen == other.seen
    }
}

impl Eq for TokenSet {}

impl FromIterator<Token> for TokenSet {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        let mut set = TokenSet::new();
        for token in iter {
            set.insert(token);
        }
        set
    }
}

impl IntoIterator for TokenSet {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenSet {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
