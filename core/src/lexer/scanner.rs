use tracing::{debug, trace};

use super::classifier::{self, CharClass};
use super::cursor::Cursor;
use super::pending::{PendingAction, PendingRegistry};
use super::state::State;
use super::token::{Token, TokenKind, TokenSet};
use crate::errors::{ScanError, SyntaxError};

/// Line-scoped finite-state scanner.
///
/// Feed it lines with [`Scanner::scan_line`] and collect the outcome with
/// [`Scanner::finish`]. Each scanner owns all of its mutable state, so
/// independent scans never interfere.
pub struct Scanner {
    state: State,
    pending: PendingRegistry,
    tokens: TokenSet,
    errors: Vec<SyntaxError>,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner {
    pub fn new() -> Self {
        Self {
            state: State::Initial,
            pending: PendingRegistry::new(),
            tokens: TokenSet::new(),
            errors: Vec::new(),
        }
    }

    /// Whether an unknown character has been met. Once set, it stays set for
    /// the rest of the scan.
    pub fn errored(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Scan every line, stopping at the first line that contains an error.
    pub fn scan_lines<'a, I>(mut self, lines: I) -> Result<TokenSet, ScanError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for (line_index, line) in lines.into_iter().enumerate() {
            if self.errored() {
                break;
            }
            self.scan_line(line_index, line);
        }
        self.finish()
    }

    pub fn scan_line(&mut self, line_index: usize, raw: &str) {
        let mut cursor = Cursor::new(line_index, raw);
        self.state = State::Initial;

        while let Some(ch) = cursor.peek() {
            if self.errored() {
                break;
            }
            trace!(code = %format!("{:#x}", ch as u32), "reading character");
            self.call_state(&cursor, ch);
            trace!(state = %self.state, index = cursor.pos(), ?ch, "context");
            cursor.advance();
        }

        debug!(line = line_index, "finished line");
    }

    /// Produce the token set, or every error collected so far. Pending tokens
    /// still open at this point are reported one error each.
    pub fn finish(mut self) -> Result<TokenSet, ScanError> {
        if self.errored() {
            return Err(ScanError::new(self.errors));
        }

        if !self.pending.is_empty() {
            let errors = self
                .pending
                .drain()
                .map(|pending| SyntaxError::UnterminatedToken {
                    line: pending.origin.line_index + 1,
                    text: pending.origin.remainder(),
                    kind: pending.action.kind(),
                })
                .collect();
            return Err(ScanError::new(errors));
        }

        Ok(self.tokens)
    }

    fn call_state(&mut self, cursor: &Cursor, ch: char) {
        trace!(state = %self.state, "calling current state");
        match self.state {
            State::Initial => self.handle_initial(cursor, ch),
            State::IdentifierBegin => self.handle_identifier_begin(cursor, ch),
            State::IdentifierEnd => self.handle_identifier_end(cursor, ch),
            State::NumberBegin => self.handle_number_begin(cursor, ch),
            State::NumberEnd => self.handle_number_end(cursor, ch),
            State::Operator => self.handle_single(cursor, ch, TokenKind::Operator),
            State::Attribution => self.handle_single(cursor, ch, TokenKind::Attribution),
            State::Delimiter => self.handle_delimiter(cursor, ch),
        }
    }

    /// Switch state. The new state's handler runs right away when asked to,
    /// when the state is quick, or when the line has no characters left.
    fn set_state(&mut self, cursor: &Cursor, ch: char, new_state: State, now: bool) {
        trace!(from = %self.state, to = %new_state, "changing state");
        self.state = new_state;
        if now || new_state.is_quick() || cursor.is_at_end() {
            self.call_state(cursor, ch);
        }
    }

    fn handle_initial(&mut self, cursor: &Cursor, ch: char) {
        let next = match classifier::classify(ch) {
            CharClass::UpperLetter => State::IdentifierBegin,
            CharClass::Digit => State::NumberBegin,
            CharClass::OperatorSymbol => State::Operator,
            CharClass::AssignmentSymbol => State::Attribution,
            CharClass::Delimiter => State::Delimiter,
            CharClass::Unknown => return self.handle_unknown_char(cursor, ch),
        };
        self.set_state(cursor, ch, next, false);
    }

    fn handle_unknown_char(&mut self, cursor: &Cursor, ch: char) {
        let index = cursor.pos().saturating_sub(1);
        let error = SyntaxError::UnknownCharacter {
            line: cursor.line_index() + 1,
            text: cursor.slice_from(index),
            character: ch,
        };
        debug!(%error, ?ch, "unknown character");
        self.errors.push(error);
    }

    fn handle_identifier_begin(&mut self, cursor: &Cursor, ch: char) {
        debug!(?ch, "got identifier begin");
        self.open_pending(cursor, PendingAction::Identifier(String::new()));
        // The first character goes through the same continuation test as the rest.
        self.set_state(cursor, ch, State::IdentifierEnd, true);
    }

    fn handle_identifier_end(&mut self, cursor: &Cursor, ch: char) {
        debug!(?ch, "got identifier end");
        self.continue_pending(cursor, ch, State::IdentifierEnd, classifier::is_identifier_continue);
    }

    fn handle_number_begin(&mut self, cursor: &Cursor, ch: char) {
        debug!(?ch, "got number begin");
        self.open_pending(cursor, PendingAction::Number(String::new()));
        self.set_state(cursor, ch, State::NumberEnd, true);
    }

    fn handle_number_end(&mut self, cursor: &Cursor, ch: char) {
        debug!(?ch, "got number end");
        self.continue_pending(cursor, ch, State::NumberEnd, classifier::is_number_continue);
    }

    fn handle_single(&mut self, cursor: &Cursor, ch: char, kind: TokenKind) {
        self.add_token(Token::new(kind, ch));
        self.set_state(cursor, ch, State::Initial, false);
    }

    fn handle_delimiter(&mut self, cursor: &Cursor, ch: char) {
        debug!(code = %format!("{:#x}", ch as u32), "turning back to initial state, found delimiter");
        self.set_state(cursor, ch, State::Initial, false);
        if let Some(token) = self.pending.resolve_most_recent() {
            self.add_token(token);
        }
    }

    /// Shared body of the `*_end` states. A continuation character is buffered
    /// and the token is flushed if the line ends with it. Any other character
    /// flushes the token and is re-examined from the initial state.
    fn continue_pending(
        &mut self,
        cursor: &Cursor,
        ch: char,
        name: State,
        accepts: fn(char) -> bool,
    ) {
        if accepts(ch) {
            self.pending.push_char(name, ch);
            if cursor.is_last() {
                self.finish_pending(name);
            }
        } else {
            self.finish_pending(name);
            self.set_state(cursor, ch, State::Initial, true);
        }
    }

    fn open_pending(&mut self, cursor: &Cursor, action: PendingAction) {
        if let Some(origin) = cursor.origin() {
            self.pending.open(action, origin);
        }
    }

    fn finish_pending(&mut self, name: State) {
        if let Some(token) = self.pending.resolve(name) {
            self.add_token(token);
        }
    }

    fn add_token(&mut self, token: Token) {
        debug!(%token, "new token");
        self.tokens.insert(token);
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::lexer::cursor::Origin;

    #[test]
    fn unresolved_pending_is_reported_from_its_origin() {
        let mut scanner = Scanner::new();
        scanner.scan_line(0, "A = 1\n");
        scanner.pending.open(
            PendingAction::Number("4".into()),
            Origin {
                line: Rc::from("X = 42"),
                line_index: 1,
                char_index: 4,
                char: '4',
            },
        );

        let err = scanner.finish().expect_err("pending token should fail the scan");
        assert_eq!(
            err.errors(),
            &[SyntaxError::UnterminatedToken {
                line: 2,
                text: "42".into(),
                kind: TokenKind::Number,
            }]
        );
        assert_eq!(err.errors()[0].to_string(), "syntax error at line 2: 42");
    }

    #[test]
    fn error_flag_survives_later_lines() {
        let mut scanner = Scanner::new();
        scanner.scan_line(0, "A # B");
        assert!(scanner.errored());
        scanner.scan_line(1, "C");
        assert!(scanner.errored());
        assert_eq!(scanner.errors.len(), 1);
        assert!(scanner.finish().is_err());
    }

    #[test]
    fn state_resets_between_lines() {
        let mut scanner = Scanner::new();
        scanner.scan_line(0, "A +");
        assert_eq!(scanner.state, State::Initial);
        scanner.scan_line(1, "AB");
        assert!(scanner.pending.is_empty());
    }
}
