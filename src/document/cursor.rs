use std::fmt;

/// A line in the buffer, identified by its 0-indexed line number.
///
/// Positions are totally ordered and unique per line, so they double as
/// stable offsets for comparisons during a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(usize);

impl Position {
    pub const START: Position = Position(0);

    pub fn new(line: usize) -> Self {
        Self(line)
    }

    /// 0-indexed line number
    pub fn line(self) -> usize {
        self.0
    }
}

impl fmt::Display for Position {
    // Users count lines from 1
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}", self.0 + 1)
    }
}

/// Scan direction through the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn reverse(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// A snapshot of one line of text together with its position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub position: Position,
    pub text: String,
}

impl Line {
    pub fn new(position: Position, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }

    /// Text with surrounding whitespace removed, as announced to the user
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }
}

/// Cursor position in the buffer (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub line: usize,
    pub column: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub fn position(&self) -> Position {
        Position::new(self.line)
    }
}

/// Which end of a selection the caret lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaretPlacement {
    Start,
    End,
}

/// A line-granular selection.
///
/// The range does not depend on the order of `anchor` and `focus`; the caret
/// sits on `focus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: Position,
    pub focus: Position,
}

impl Selection {
    pub fn new(anchor: Position, focus: Position) -> Self {
        Self { anchor, focus }
    }

    /// Build a selection over `start..=end` with the caret on the requested end
    pub fn spanning(start: Position, end: Position, caret: CaretPlacement) -> Self {
        let (first, last) = if start <= end {
            (start, end)
        } else {
            (end, start)
        };
        match caret {
            CaretPlacement::End => Self::new(first, last),
            CaretPlacement::Start => Self::new(last, first),
        }
    }

    pub fn start(&self) -> Position {
        self.anchor.min(self.focus)
    }

    pub fn end(&self) -> Position {
        self.anchor.max(self.focus)
    }

    pub fn line_count(&self) -> usize {
        self.end().line() - self.start().line() + 1
    }
}
