use std::fmt;

/// Scanner states. Exactly one is active for each character examined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Initial,
    IdentifierBegin,
    IdentifierEnd,
    NumberBegin,
    NumberEnd,
    Operator,
    Attribution,
    Delimiter,
}

impl State {
    /// A quick state runs its handler on the same character that caused the
    /// transition into it. Other states wait for the next character.
    pub fn is_quick(self) -> bool {
        matches!(
            self,
            State::IdentifierBegin
                | State::NumberBegin
                | State::Operator
                | State::Attribution
                | State::Delimiter
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            State::Initial => "initial",
            State::IdentifierBegin => "identifier_begin",
            State::IdentifierEnd => "identifier_end",
            State::NumberBegin => "number_begin",
            State::NumberEnd => "number_end",
            State::Operator => "operator",
            State::Attribution => "attribution",
            State::Delimiter => "delimiter",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
