use tracing::debug;

use super::find_declaration;
use crate::document::{BufferAccess, DeclarationKind, Direction, Line, LineAnalyzer, Position};
use crate::error::{NavError, NavResult};

/// Lines `start..=end` making up one declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// The declaration line itself
    pub declaration: Line,
    pub end: Position,
}

impl Block {
    pub fn start(&self) -> Position {
        self.declaration.position
    }

    pub fn line_count(&self) -> usize {
        self.end.line() - self.start().line() + 1
    }

    pub fn contains(&self, position: Position) -> bool {
        self.start() <= position && position <= self.end
    }
}

/// Extent of the block opened by the declaration at `declaration`.
///
/// The block runs until the first non-blank line indented at or below the
/// declaration; blank lines never end it on their own, so blanks directly
/// before that line stay inside. Reaching the last line ends the block there.
pub fn block_extent<B>(buffer: &B, declaration: Position) -> NavResult<Block>
where
    B: BufferAccess + ?Sized,
{
    let declaration = buffer.line_at(declaration)?;
    let base_indent = LineAnalyzer::indent_level(&declaration.text);

    let mut end = declaration.position;
    loop {
        let next = buffer.step_line(end, Direction::Forward);
        if next == end {
            break;
        }

        let line = buffer.line_at(next)?;
        if !LineAnalyzer::is_blank(&line.text)
            && LineAnalyzer::indent_level(&line.text) <= base_indent
        {
            break;
        }
        end = next;
    }

    debug!(start = %declaration.position, %end, base_indent, "block extent");
    Ok(Block { declaration, end })
}

/// Block of the `kind` declaration the cursor is on, or the nearest one above it
pub fn block_extent_at_cursor<B>(buffer: &B, kind: DeclarationKind) -> NavResult<Block>
where
    B: BufferAccess + ?Sized,
{
    let cursor = buffer.cursor_line()?;
    let declaration = if LineAnalyzer::is_declaration(&cursor.text, kind) {
        cursor.position
    } else {
        find_declaration(buffer, cursor.position, kind, Direction::Backward)?
            .ok_or_else(|| NavError::not_found(format!("no {kind} declaration found")))?
            .position
    };

    block_extent(buffer, declaration)
}
