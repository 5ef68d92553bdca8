use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::*;

#[test]
fn reports_diagnostics_with_one_based_line_numbers() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("sample.rb");
    fs::write(&file, "def foo()\nx ||= false\n").unwrap();

    let report = FileAnalyzer::new().analyze(&file).unwrap();

    assert_eq!(report.diagnostics.len(), 2);
    assert_eq!(report.diagnostics[0].line, 1);
    assert_eq!(report.diagnostics[0].rule, "METHOD DEF W/ EMPTY PARENS");
    assert_eq!(report.diagnostics[0].text, "def foo()");
    assert_eq!(report.diagnostics[1].line, 2);
    assert_eq!(report.diagnostics[1].rule, "||= INITIALIZING BOOLEAN");
    assert!(report.problems.is_empty());
}

#[test]
fn invalid_utf8_line_is_recovered_and_rest_is_checked() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("mixed.rb");
    fs::write(&file, b"x ||= true\n\xff\xfe\nfor i in list\n").unwrap();

    let report = FileAnalyzer::new().analyze(&file).unwrap();

    assert_eq!(report.problems.len(), 1);
    assert_eq!(report.problems[0].line, 2);

    let rules: Vec<_> = report.diagnostics.iter().map(|d| d.rule).collect();
    assert_eq!(rules, vec!["||= INITIALIZING BOOLEAN", "FOR USED"]);
    assert_eq!(report.diagnostics[1].line, 3);
}

#[test]
fn missing_file_is_a_read_error() {
    let err = FileAnalyzer::new()
        .analyze(Path::new("no/such/file.rb"))
        .unwrap_err();
    assert!(matches!(err, StyleGuardError::FileRead { .. }));
}

#[test]
fn crlf_terminator_is_not_trailing_whitespace() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("crlf.rb");
    fs::write(&file, "x = 1\r\ny = 2 \r\n").unwrap();

    let report = FileAnalyzer::new().analyze(&file).unwrap();

    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].line, 2);
    assert_eq!(report.diagnostics[0].rule, "TRAILING WHITESPACE");
}

#[test]
fn split_lines_handles_terminators() {
    assert_eq!(split_lines(b"a\nb\n").len(), 2);
    assert_eq!(split_lines(b"a\nb").len(), 2);
    assert_eq!(split_lines(b"a\n\n").len(), 2);
    assert!(split_lines(b"").is_empty());
    assert_eq!(split_lines(b"a\r\nb\r\n"), vec![&b"a"[..], &b"b"[..]]);
}
