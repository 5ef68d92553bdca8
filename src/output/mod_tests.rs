use std::path::PathBuf;

use crate::analyzer::LineProblem;
use crate::classifier::Diagnostic;

use super::*;

#[test]
fn diagnostic_line_format() {
    let diagnostic = Diagnostic {
        path: PathBuf::from("lib/user.rb"),
        line: 12,
        rule: "HARD TABS",
        text: "\tx = 1".to_string(),
    };

    assert_eq!(
        TextFormatter.format(&diagnostic),
        "lib/user.rb:12 [HARD TABS] - \tx = 1"
    );
}

#[test]
fn problem_line_format_names_file_and_line() {
    let problem = LineProblem {
        path: PathBuf::from("lib/user.rb"),
        line: 7,
        message: "invalid UTF-8: bad byte".to_string(),
    };

    let rendered = TextFormatter::format_problem(&problem);
    assert!(rendered.starts_with("lib/user.rb:7"));
    assert!(rendered.contains("invalid UTF-8"));
}
