//! Line-by-line traversal primitives shared by every navigator command.
//!
//! Each scan steps through the buffer with [`BufferAccess::step_line`] and
//! stops either on a matching line or when a step no longer moves, which is
//! how the buffer edges are detected.

pub mod block;
pub mod declaration;
pub mod indent;

pub use block::{Block, block_extent, block_extent_at_cursor};
pub use declaration::find_declaration;
pub use indent::{
    first_line_at_current_indent, last_line_at_current_indent, next_different_indent,
    next_equal_indent, previous_different_indent, previous_equal_indent,
};

use crate::document::{BufferAccess, Direction, Line, LineAnalyzer, Position};
use crate::error::NavResult;

/// Result of a bounded scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scan {
    /// First line satisfying the predicate
    Found(Line),
    /// The scan hit the buffer edge; carries the last position visited
    Boundary(Position),
}

/// Step from `from` in `direction` until a line's indentation satisfies
/// `predicate(line_indent, anchor_indent)`.
///
/// `from` itself is never tested.
pub fn scan_until<B, P>(
    buffer: &B,
    from: Position,
    anchor_indent: usize,
    direction: Direction,
    predicate: P,
) -> NavResult<Scan>
where
    B: BufferAccess + ?Sized,
    P: Fn(usize, usize) -> bool,
{
    scan_lines(buffer, from, direction, |line| {
        predicate(LineAnalyzer::indent_level(&line.text), anchor_indent)
    })
}

/// Step from `from` in `direction` until `matches` accepts a line
pub(crate) fn scan_lines<B, F>(
    buffer: &B,
    from: Position,
    direction: Direction,
    mut matches: F,
) -> NavResult<Scan>
where
    B: BufferAccess + ?Sized,
    F: FnMut(&Line) -> bool,
{
    let mut current = from;
    loop {
        let next = buffer.step_line(current, direction);
        if next == current {
            return Ok(Scan::Boundary(current));
        }

        let line = buffer.line_at(next)?;
        if matches(&line) {
            return Ok(Scan::Found(line));
        }
        current = next;
    }
}
