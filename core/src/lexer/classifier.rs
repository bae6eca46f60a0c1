/// Characters that terminate a token and reset the scanner to its initial state.
pub const DELIMITERS: [char; 3] = ['\r', '\n', ' '];

/// Lexical category of a single character, as seen from the initial state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    UpperLetter,
    Digit,
    OperatorSymbol,
    AssignmentSymbol,
    Delimiter,
    Unknown,
}

pub fn classify(c: char) -> CharClass {
    match c {
        'A'..='Z' => CharClass::UpperLetter,
        '0'..='9' => CharClass::Digit,
        '+' | '-' | '/' | '*' => CharClass::OperatorSymbol,
        '=' => CharClass::AssignmentSymbol,
        c if is_delimiter(c) => CharClass::Delimiter,
        _ => CharClass::Unknown,
    }
}

pub fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(&c)
}

/// Whether `c` may continue an identifier. Wider than what may start one:
/// lowercase letters and `_` are accepted here but never in the initial state.
pub fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

pub fn is_number_continue(c: char) -> bool {
    c.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_each_category() {
        assert_eq!(classify('Q'), CharClass::UpperLetter);
        assert_eq!(classify('7'), CharClass::Digit);
        for op in ['+', '-', '/', '*'] {
            assert_eq!(classify(op), CharClass::OperatorSymbol);
        }
        assert_eq!(classify('='), CharClass::AssignmentSymbol);
        for d in DELIMITERS {
            assert_eq!(classify(d), CharClass::Delimiter);
        }
    }

    #[test]
    fn rejects_everything_else() {
        for c in ['a', 'z', '_', '#', '\t', '(', 'É', '٣'] {
            assert_eq!(classify(c), CharClass::Unknown, "{c:?}");
        }
    }

    #[test]
    fn identifier_continuation_is_wider_than_start() {
        assert!(is_identifier_continue('a'));
        assert!(is_identifier_continue('_'));
        assert!(is_identifier_continue('9'));
        assert!(!is_identifier_continue('+'));
        assert!(!is_number_continue('a'));
        assert!(is_number_continue('0'));
    }
}
