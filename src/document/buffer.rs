use std::path::{Path, PathBuf};

use miette::Result;

use super::{
    BufferAccess, CaretPlacement, Cursor, Direction, Line, LineAnalyzer, Position, Selection,
};
use crate::error::{NavError, NavResult};

/// In-memory line buffer used by the command-line host
#[derive(Debug, Clone)]
pub struct LineBuffer {
    /// Path to the file (if loaded from disk)
    file_path: Option<PathBuf>,
    /// Current cursor position
    cursor: Cursor,
    /// Active line selection, if any
    selection: Option<Selection>,
    /// Content as lines, without line terminators
    lines: Vec<String>,
    /// Whether the source text ended with a newline
    trailing_newline: bool,
    /// Terminator written between lines, `"\r\n"` when the source used it
    line_ending: &'static str,
    /// Whether the buffer has been modified
    modified: bool,
    revision: u64,
}

impl LineBuffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self {
            file_path: None,
            cursor: Cursor::new(),
            selection: None,
            lines: vec![String::new()],
            trailing_newline: false,
            line_ending: "\n",
            modified: false,
            revision: 0,
        }
    }

    /// Create buffer from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| miette::miette!("Failed to read file {}: {}", path.display(), e))?;

        let mut buffer = Self::from_string(&content);
        buffer.file_path = Some(path.to_path_buf());
        Ok(buffer)
    }

    /// Create buffer from string
    pub fn from_string(content: &str) -> Self {
        Self {
            lines: Self::extract_lines(content),
            trailing_newline: content.ends_with('\n'),
            line_ending: Self::detect_line_ending(content),
            ..Self::new()
        }
    }

    /// Create buffer from individual lines
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            return Self::new();
        }
        Self {
            lines,
            ..Self::new()
        }
    }

    fn detect_line_ending(content: &str) -> &'static str {
        if content.contains("\r\n") {
            "\r\n"
        } else {
            "\n"
        }
    }

    /// Extract lines from content
    fn extract_lines(content: &str) -> Vec<String> {
        if content.is_empty() {
            vec![String::new()]
        } else {
            content.lines().map(|s| s.to_string()).collect()
        }
    }

    /// Get the current cursor position
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Move the caret to the start of a line, clamped to the buffer
    pub fn set_cursor_line(&mut self, line: usize) {
        self.cursor = Cursor::with_position(line.min(self.last_line()), 0);
        self.selection = None;
    }

    /// Get the file path
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Check if buffer has been modified
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Get all lines
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Get a specific line
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(|s| s.as_str())
    }

    /// Get total line count
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn last_line(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    fn check(&self, position: Position) -> NavResult<()> {
        if position.line() < self.lines.len() {
            Ok(())
        } else {
            Err(NavError::stale_position(position, self.lines.len()))
        }
    }

    /// Save buffer to file
    pub fn save(&mut self) -> Result<()> {
        let path = self
            .file_path
            .clone()
            .ok_or_else(|| miette::miette!("No file path set"))?;
        self.write_to(&path)
    }

    /// Save buffer to a specific file
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.write_to(path.as_ref())?;
        self.file_path = Some(path.as_ref().to_path_buf());
        Ok(())
    }

    fn write_to(&mut self, path: &Path) -> Result<()> {
        std::fs::write(path, self.content())
            .map_err(|e| miette::miette!("Failed to write file {}: {}", path.display(), e))?;
        self.modified = false;
        Ok(())
    }

    /// Get buffer content as string
    pub fn content(&self) -> String {
        let mut content = self.lines.join(self.line_ending);
        if self.trailing_newline {
            content.push_str(self.line_ending);
        }
        content
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl BufferAccess for LineBuffer {
    fn cursor_line(&self) -> NavResult<Line> {
        self.line_at(self.cursor.position())
    }

    fn line_at(&self, position: Position) -> NavResult<Line> {
        self.lines
            .get(position.line())
            .map(|text| Line::new(position, text.as_str()))
            .ok_or_else(|| NavError::stale_position(position, self.lines.len()))
    }

    fn step_line(&self, position: Position, direction: Direction) -> Position {
        let line = position.line().min(self.last_line());
        match direction {
            Direction::Forward => Position::new((line + 1).min(self.last_line())),
            Direction::Backward => Position::new(line.saturating_sub(1)),
        }
    }

    fn set_selection(
        &mut self,
        start: Position,
        end: Position,
        caret: CaretPlacement,
    ) -> NavResult<()> {
        self.check(start)?;
        self.check(end)?;

        let selection = Selection::spanning(start, end, caret);
        let focus = selection.focus.line();
        let column = match caret {
            CaretPlacement::Start => 0,
            CaretPlacement::End => self.lines[focus].chars().count(),
        };
        self.cursor = Cursor::with_position(focus, column);
        self.selection = Some(selection);
        Ok(())
    }

    fn place_caret(&mut self, position: Position) -> NavResult<()> {
        self.check(position)?;
        let column = LineAnalyzer::caret_column(&self.lines[position.line()]);
        self.cursor = Cursor::with_position(position.line(), column);
        self.selection = None;
        Ok(())
    }

    fn selected_text(&self) -> Option<String> {
        let selection = self.selection?;
        let lines = self
            .lines
            .get(selection.start().line()..=selection.end().line())?;
        Some(lines.join(self.line_ending))
    }

    fn whole_document_text(&self) -> String {
        self.content()
    }

    fn delete_selection(&mut self) -> NavResult<usize> {
        let selection = self
            .selection
            .ok_or_else(|| NavError::invalid_state("nothing is selected"))?;
        self.check(selection.end())?;

        let start = selection.start().line();
        let removed = self.lines.drain(start..=selection.end().line()).count();
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }

        self.selection = None;
        self.modified = true;
        self.revision += 1;

        let line = start.min(self.last_line());
        self.cursor = Cursor::with_position(line, LineAnalyzer::caret_column(&self.lines[line]));
        Ok(removed)
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}
