mod rules;
mod strip;

pub use rules::{Gate, Matcher, Rule, default_rules};
pub use strip::LiteralStripper;

use std::path::{Path, PathBuf};

/// One physical line under analysis: file, 1-based number, raw text with
/// the line terminator already removed.
#[derive(Debug, Clone, Copy)]
pub struct LineContext<'a> {
    pub path: &'a Path,
    pub line: usize,
    pub text: &'a str,
}

/// One reported rule violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub path: PathBuf,
    pub line: usize,
    pub rule: &'static str,
    pub text: String,
}

/// A line is a comment line iff its first non-whitespace character is `#`.
#[must_use]
pub fn is_comment_line(text: &str) -> bool {
    text.trim_start().starts_with('#')
}

/// Applies the fixed rule battery to single lines.
///
/// Each line is diagnosed independently: there is no cross-line state,
/// and brace/do-end balance is deliberately not tracked across lines.
pub struct LineClassifier {
    rules: Vec<Rule>,
    stripper: LiteralStripper,
}

impl LineClassifier {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
            stripper: LiteralStripper::new(),
        }
    }

    /// Apply every rule to one line, in table order, and report all that
    /// fire. Rules never short-circuit each other; multiple diagnostics
    /// per line are expected.
    #[must_use]
    pub fn classify(&self, ctx: &LineContext<'_>) -> Vec<Diagnostic> {
        let comment = is_comment_line(ctx.text);
        let stripped = if comment {
            None
        } else {
            Some(self.stripper.strip(ctx.text))
        };

        let mut diagnostics = Vec::new();
        for rule in &self.rules {
            let fired = match rule.gate {
                Gate::Always => rule.matches(ctx.text),
                Gate::CommentOnly => comment && rule.matches(ctx.text),
                Gate::CodeOnly => stripped.as_deref().is_some_and(|text| rule.matches(text)),
            };
            if fired {
                diagnostics.push(Diagnostic {
                    path: ctx.path.to_path_buf(),
                    line: ctx.line,
                    rule: rule.name,
                    text: ctx.text.to_string(),
                });
            }
        }
        diagnostics
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
