use std::path::Path;
use std::path::PathBuf;

/// A line the parser could not make sense of and skipped.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Diagnostic {
    pub(super) file_path: Option<PathBuf>,
    pub(super) line: String,
    pub(super) line_number: usize,
}
impl Diagnostic {
    /// The file the line came from, if the fragment was read from a file.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn line(&self) -> &str {
        self.line.as_str()
    }

    /// 1-indexed.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}
impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file_path {
            Some(file_path) => write!(
                f,
                "{}:{}: Unmatched line of text `{}`",
                file_path.display(),
                self.line_number,
                self.line,
            ),
            None => write!(
                f,
                "line {}: Unmatched line of text `{}`",
                self.line_number,
                self.line,
            ),
        }
    }
}
