use super::{Scan, scan_until};
use crate::document::{BufferAccess, Direction, Line, LineAnalyzer};
use crate::error::NavResult;

/// Cursor line and its indentation, the anchor for every scan below
fn anchor<B>(buffer: &B) -> NavResult<(Line, usize)>
where
    B: BufferAccess + ?Sized,
{
    let line = buffer.cursor_line()?;
    let indent = LineAnalyzer::indent_level(&line.text);
    Ok((line, indent))
}

fn seek<B>(
    buffer: &B,
    direction: Direction,
    predicate: fn(usize, usize) -> bool,
) -> NavResult<Option<Line>>
where
    B: BufferAccess + ?Sized,
{
    let (line, indent) = anchor(buffer)?;
    match scan_until(buffer, line.position, indent, direction, predicate)? {
        Scan::Found(line) => Ok(Some(line)),
        Scan::Boundary(_) => Ok(None),
    }
}

fn differs(line: usize, anchor: usize) -> bool {
    line != anchor
}

fn equals(line: usize, anchor: usize) -> bool {
    line == anchor
}

/// Next line whose indentation differs from the cursor line
pub fn next_different_indent<B>(buffer: &B) -> NavResult<Option<Line>>
where
    B: BufferAccess + ?Sized,
{
    seek(buffer, Direction::Forward, differs)
}

/// Previous line whose indentation differs from the cursor line
pub fn previous_different_indent<B>(buffer: &B) -> NavResult<Option<Line>>
where
    B: BufferAccess + ?Sized,
{
    seek(buffer, Direction::Backward, differs)
}

/// Next line sharing the cursor line's indentation
pub fn next_equal_indent<B>(buffer: &B) -> NavResult<Option<Line>>
where
    B: BufferAccess + ?Sized,
{
    seek(buffer, Direction::Forward, equals)
}

/// Previous line sharing the cursor line's indentation
pub fn previous_equal_indent<B>(buffer: &B) -> NavResult<Option<Line>>
where
    B: BufferAccess + ?Sized,
{
    seek(buffer, Direction::Backward, equals)
}

/// Outermost line of the run of lines around the cursor sharing its
/// indentation, in `direction`. A run reaching the buffer edge ends there.
fn run_edge<B>(buffer: &B, direction: Direction) -> NavResult<Line>
where
    B: BufferAccess + ?Sized,
{
    let (line, indent) = anchor(buffer)?;
    let edge = match scan_until(buffer, line.position, indent, direction, differs)? {
        Scan::Found(differing) => buffer.step_line(differing.position, direction.reverse()),
        Scan::Boundary(position) => position,
    };
    buffer.line_at(edge)
}

/// First line of the current indentation run
pub fn first_line_at_current_indent<B>(buffer: &B) -> NavResult<Line>
where
    B: BufferAccess + ?Sized,
{
    run_edge(buffer, Direction::Backward)
}

/// Last line of the current indentation run
pub fn last_line_at_current_indent<B>(buffer: &B) -> NavResult<Line>
where
    B: BufferAccess + ?Sized,
{
    run_edge(buffer, Direction::Forward)
}
