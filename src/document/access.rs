use crate::error::NavResult;

use super::{CaretPlacement, Direction, Line, Position};

/// Capability a host grants the navigator over its live buffer.
///
/// Every call reads the buffer as it is at that moment; the navigator never
/// caches lines across calls.
pub trait BufferAccess {
    /// The line containing the caret
    fn cursor_line(&self) -> NavResult<Line>;

    /// The line at `position`, or `InvalidState` if it no longer exists
    fn line_at(&self, position: Position) -> NavResult<Line>;

    /// The neighbouring position in `direction`.
    ///
    /// Clamped at the first and last line: stepping past an edge returns
    /// `position` unchanged.
    fn step_line(&self, position: Position, direction: Direction) -> Position;

    /// Select whole lines `start..=end` and put the caret on one end
    fn set_selection(
        &mut self,
        start: Position,
        end: Position,
        caret: CaretPlacement,
    ) -> NavResult<()>;

    /// Clear any selection and move the caret to `position`
    fn place_caret(&mut self, position: Position) -> NavResult<()>;

    fn selected_text(&self) -> Option<String>;

    fn whole_document_text(&self) -> String;

    /// Remove the selected lines, returning how many were removed
    fn delete_selection(&mut self) -> NavResult<usize>;

    /// Counter bumped on every mutation of the text
    fn revision(&self) -> u64;
}
