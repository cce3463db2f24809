use tracing::debug;

use super::{Scan, scan_lines};
use crate::document::{BufferAccess, DeclarationKind, Direction, Line, LineAnalyzer, Position};
use crate::error::NavResult;

/// Find the nearest declaration of `kind` strictly after (or before) `from`.
///
/// `Ok(None)` means the scan reached the buffer edge without a match.
pub fn find_declaration<B>(
    buffer: &B,
    from: Position,
    kind: DeclarationKind,
    direction: Direction,
) -> NavResult<Option<Line>>
where
    B: BufferAccess + ?Sized,
{
    let scan = scan_lines(buffer, from, direction, |line| {
        LineAnalyzer::is_declaration(&line.text, kind)
    })?;

    match scan {
        Scan::Found(line) => {
            debug!(%kind, position = %line.position, text = line.trimmed(), "declaration found");
            Ok(Some(line))
        }
        Scan::Boundary(position) => {
            debug!(%kind, ?direction, stopped_at = %position, "no declaration before buffer edge");
            Ok(None)
        }
    }
}
