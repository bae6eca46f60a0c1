use std::rc::Rc;

use super::classifier::is_delimiter;

/// Character-level reader over a single source line.
///
/// Leading and trailing delimiters are stripped on construction, so the last
/// character of the cursor is the last significant character of the line.
pub struct Cursor {
    line: Rc<str>,
    chars: Vec<char>,
    line_index: usize,
    pos: usize,
}

/// Position where a pending token was opened, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    pub line: Rc<str>,
    pub line_index: usize,
    pub char_index: usize,
    pub char: char,
}

impl Origin {
    /// Line text from the opening character onwards.
    pub fn remainder(&self) -> String {
        self.line.chars().skip(self.char_index).collect()
    }
}

impl Cursor {
    pub fn new(line_index: usize, raw: &str) -> Self {
        let line: Rc<str> = Rc::from(raw.trim_matches(is_delimiter));
        Self {
            chars: line.chars().collect(),
            line,
            line_index,
            pos: 0,
        }
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    /// Zero-based index of this line in the document.
    pub fn line_index(&self) -> usize {
        self.line_index
    }

    /// Index of the current character within the stripped line.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        Some(ch)
    }

    /// Whether the current character is the final one of the line.
    pub fn is_last(&self) -> bool {
        self.pos + 1 == self.chars.len()
    }

    /// Whether every character of the line has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Line text starting at character index `from`.
    pub fn slice_from(&self, from: usize) -> String {
        self.chars[from.min(self.chars.len())..].iter().collect()
    }

    pub fn origin(&self) -> Option<Origin> {
        Some(Origin {
            line: Rc::clone(&self.line),
            line_index: self.line_index,
            char_index: self.pos,
            char: self.peek()?,
        })
    }
}
