//! Deferred token commits.
//!
//! A multi-character token cannot be emitted until its extent is known. While
//! it is being read it lives here as a pending entry, keyed by the state that
//! will finish it, and is turned into a [`Token`] when resolved.

use tracing::debug;

use super::cursor::Origin;
use super::state::State;
use super::token::{Token, TokenKind};

/// The action a pending entry performs when resolved, together with the text
/// accumulated for it so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    Identifier(String),
    Number(String),
}

impl PendingAction {
    /// State name the entry is registered under.
    pub fn name(&self) -> State {
        match self {
            PendingAction::Identifier(_) => State::IdentifierEnd,
            PendingAction::Number(_) => State::NumberEnd,
        }
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            PendingAction::Identifier(_) => TokenKind::Identifier,
            PendingAction::Number(_) => TokenKind::Number,
        }
    }

    fn buffer_mut(&mut self) -> &mut String {
        match self {
            PendingAction::Identifier(text) | PendingAction::Number(text) => text,
        }
    }

    fn into_token(self) -> Token {
        let kind = self.kind();
        match self {
            PendingAction::Identifier(text) | PendingAction::Number(text) => Token::new(kind, text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pending {
    pub action: PendingAction,
    pub origin: Origin,
}

/// Ordered set of pending entries, at most one per state name. The last entry
/// is the most recently opened one.
#[derive(Debug, Default)]
pub struct PendingRegistry {
    entries: Vec<Pending>,
}

impl PendingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an entry. An existing entry with the same name is replaced and the
    /// new one becomes the most recent.
    pub fn open(&mut self, action: PendingAction, origin: Origin) {
        let name = action.name();
        self.entries.retain(|entry| entry.action.name() != name);
        debug!(%name, line = origin.line_index + 1, column = origin.char_index, "opened pending");
        self.entries.push(Pending { action, origin });
    }

    /// Append a character to the named entry's buffer. No-op if absent.
    pub fn push_char(&mut self, name: State, c: char) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.action.name() == name) {
            entry.action.buffer_mut().push(c);
        }
    }

    /// Remove the named entry and produce its token.
    pub fn resolve(&mut self, name: State) -> Option<Token> {
        let index = self.entries.iter().position(|entry| entry.action.name() == name)?;
        let token = self.entries.remove(index).action.into_token();
        debug!(%name, %token, "resolved pending");
        Some(token)
    }

    pub fn resolve_most_recent(&mut self) -> Option<Token> {
        let name = self.entries.last()?.action.name();
        self.resolve(name)
    }

    pub fn contains(&self, name: State) -> bool {
        self.entries.iter().any(|entry| entry.action.name() == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Take every outstanding entry, oldest first.
    pub fn drain(&mut self) -> std::vec::Drain<'_, Pending> {
        self.entries.drain(..)
    }
}
