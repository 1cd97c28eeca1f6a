use std::path::Path;
use std::path::PathBuf;

/// A forward-only view over the lines of one schema fragment.
///
/// The cursor starts on line 1. It never moves backwards; every "advance"
/// operation moves exactly one line forward (and stops one past the last
/// line).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineCursor {
    file_path: Option<PathBuf>,
    lines: Vec<String>,
    position: usize,
}
impl LineCursor {
    /// Loads the lines of the file at `file_path`.
    ///
    /// A file that cannot be read (or is not valid UTF-8) yields an empty
    /// cursor rather than an error.
    pub fn from_file(file_path: impl AsRef<Path>) -> Self {
        let file_path = file_path.as_ref();
        let lines = match std::fs::read_to_string(file_path) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(err) => {
                log::warn!("Unable to read schema file {file_path:?}: {err}");
                vec![]
            },
        };

        Self {
            file_path: Some(file_path.to_path_buf()),
            lines,
            position: 0,
        }
    }

    pub fn from_lines<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            file_path: None,
            lines: lines.into_iter().map(Into::into).collect(),
            position: 0,
        }
    }

    pub fn from_str(content: &str) -> Self {
        Self::from_lines(content.lines())
    }

    /// Moves forward one line and returns the new current line.
    pub fn advance(&mut self) -> Option<&str> {
        if self.position < self.lines.len() {
            self.position += 1;
        }
        self.current()
    }

    /// Returns the current line and then moves forward one line.
    pub fn advance_and_get_current(&mut self) -> Option<&str> {
        let position = self.position;
        if position < self.lines.len() {
            self.position += 1;
        }
        self.lines.get(position).map(String::as_str)
    }

    pub fn current(&self) -> Option<&str> {
        self.lines.get(self.position).map(String::as_str)
    }

    /// The 1-indexed number of the current line.
    pub fn current_line_number(&self) -> usize {
        self.position + 1
    }

    /// The path of the file these lines were read from, if any.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Returns the line with the given 1-indexed number, if it exists.
    pub fn get_by_number(&self, line_number: usize) -> Option<&str> {
        line_number.checked_sub(1)
            .and_then(|idx| self.lines.get(idx))
            .map(String::as_str)
    }

    /// Whether a current line is available.
    pub fn has_more(&self) -> bool {
        self.position < self.lines.len()
    }

    /// Returns the line after the current one without moving.
    pub fn peek_next(&self) -> Option<&str> {
        self.lines.get(self.position + 1).map(String::as_str)
    }

    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }
}
