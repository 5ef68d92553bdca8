use std::fs;
use std::path::{Path, PathBuf};

use crate::classifier::{Diagnostic, LineClassifier, LineContext};
use crate::error::{Result, StyleGuardError};

/// A per-line problem recovered during analysis (e.g. a line that is not
/// valid UTF-8). Never aborts the file; surfaced on stderr by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineProblem {
    pub path: PathBuf,
    pub line: usize,
    pub message: String,
}

/// Everything found in one file: diagnostics in line order, plus any
/// lines that could not be processed.
#[derive(Debug, Default)]
pub struct FileReport {
    pub diagnostics: Vec<Diagnostic>,
    pub problems: Vec<LineProblem>,
}

/// Drives the classifier over one file's physical lines.
pub struct FileAnalyzer {
    classifier: LineClassifier,
}

impl FileAnalyzer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            classifier: LineClassifier::new(),
        }
    }

    /// Analyze one file, line by line, with 1-based line numbers.
    ///
    /// # Errors
    /// Returns an error only if the file itself cannot be read.
    /// Individual undecodable lines are recovered and reported in the
    /// `FileReport` so the rest of the file is still checked.
    pub fn analyze(&self, path: &Path) -> Result<FileReport> {
        let bytes = fs::read(path).map_err(|e| StyleGuardError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut report = FileReport::default();
        for (index, raw) in split_lines(&bytes).into_iter().enumerate() {
            let number = index + 1;
            match std::str::from_utf8(raw) {
                Ok(text) => {
                    let ctx = LineContext {
                        path,
                        line: number,
                        text,
                    };
                    report.diagnostics.extend(self.classifier.classify(&ctx));
                }
                Err(e) => report.problems.push(LineProblem {
                    path: path.to_path_buf(),
                    line: number,
                    message: format!("invalid UTF-8: {e}"),
                }),
            }
        }

        Ok(report)
    }
}

impl Default for FileAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Split file contents into physical lines: LF-separated, with a trailing
/// CR stripped so CRLF input is handled. A trailing newline does not
/// produce a phantom empty final line.
fn split_lines(bytes: &[u8]) -> Vec<&[u8]> {
    let mut lines: Vec<&[u8]> = bytes.split(|&b| b == b'\n').collect();
    if bytes.is_empty() || bytes.ends_with(b"\n") {
        lines.pop();
    }
    lines
        .into_iter()
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
