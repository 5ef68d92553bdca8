use crate::analyzer::LineProblem;
use crate::classifier::Diagnostic;

/// Trait for rendering diagnostics for the user.
pub trait DiagnosticFormatter {
    fn format(&self, diagnostic: &Diagnostic) -> String;
}

/// The plain line-oriented format: `<path>:<line> [<RULE>] - <content>`.
pub struct TextFormatter;

impl DiagnosticFormatter for TextFormatter {
    fn format(&self, diagnostic: &Diagnostic) -> String {
        format!(
            "{}:{} [{}] - {}",
            diagnostic.path.display(),
            diagnostic.line,
            diagnostic.rule,
            diagnostic.text
        )
    }
}

impl TextFormatter {
    /// Stderr rendering for a line that could not be processed.
    #[must_use]
    pub fn format_problem(problem: &LineProblem) -> String {
        format!(
            "{}:{} - problem processing line: {}",
            problem.path.display(),
            problem.line,
            problem.message
        )
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
