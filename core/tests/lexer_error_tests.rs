use lexscan::lexer::{lex, lex_path};
use lexscan::{LexError, SyntaxError};
use pretty_assertions::assert_eq;

fn error_lines(source: &str) -> Vec<String> {
    lex(source)
        .expect_err("lexing should fail")
        .errors()
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn lex_unknown_character_fails() {
    let err = lex("A = 1\nB = #\n").expect_err("lexing should fail");
    assert_eq!(
        err.errors(),
        &[SyntaxError::UnknownCharacter {
            line: 2,
            text: " #".into(),
            character: '#',
        }]
    );
}

#[test]
fn lex_unknown_character_reports_one_position_back() {
    assert_eq!(error_lines("AB + 1 ? 2"), vec!["syntax error at line 1:  ? 2"]);
}

#[test]
fn lex_unknown_character_at_line_start() {
    assert_eq!(error_lines("#A = 1"), vec!["syntax error at line 1: #A = 1"]);
    assert_eq!(error_lines("\n  x"), vec!["syntax error at line 2: x"]);
}

#[test]
fn lex_lowercase_cannot_start_identifier() {
    let err = lex("abc").expect_err("lexing should fail");
    assert!(matches!(
        err.errors(),
        [SyntaxError::UnknownCharacter { character: 'a', line: 1, .. }]
    ));
}

#[test]
fn lex_underscore_cannot_start_identifier() {
    assert_eq!(error_lines("_A"), vec!["syntax error at line 1: _A"]);
}

#[test]
fn lex_tab_is_not_a_delimiter() {
    assert_eq!(error_lines("A\tB"), vec!["syntax error at line 1: A\tB"]);
}

#[test]
fn lex_only_first_error_is_reported() {
    let err = lex("A = $\nB = %\nC = &\n").expect_err("lexing should fail");
    assert_eq!(err.errors().len(), 1);
    assert_eq!(err.errors()[0].line(), 1);
    assert_eq!(err.errors()[0].text(), " $");
}

#[test]
fn lex_error_discards_valid_tokens() {
    let result = lex("A1 = B2 + 3\nC = 4\nD = (5)\n");
    assert!(result.is_err());
}

#[test]
fn lex_non_ascii_reports_by_character() {
    assert_eq!(error_lines("A = é1"), vec!["syntax error at line 1:  é1"]);
}

#[test]
fn scan_error_summary() {
    let err = lex("?").expect_err("lexing should fail");
    assert_eq!(err.to_string(), "failed to scan source: 1 syntax error(s)");
}

#[test]
fn lex_missing_file() {
    let path = std::env::temp_dir().join("lexscan-this-file-does-not-exist.txt");
    let err = lex_path(&path).expect_err("reading should fail");
    assert!(matches!(err, LexError::Io { .. }));
    assert!(err.to_string().starts_with("could not read"));
}

#[test]
fn lex_path_scan_failure_is_transparent() {
    let path = std::env::temp_dir().join(format!(
        "lexscan-scan-failure-{}.txt",
        std::process::id()
    ));
    std::fs::write(&path, "A = !\n").expect("temp file should be writable");
    let result = lex_path(&path);
    std::fs::remove_file(&path).ok();

    match result {
        Err(LexError::Scan(err)) => {
            assert_eq!(err.errors()[0].to_string(), "syntax error at line 1:  !");
        }
        other => panic!("expected scan failure, got {other:?}"),
    }
}
