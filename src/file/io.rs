use std::path::Path;

use miette::Result;
use tracing::debug;

use crate::document::LineBuffer;

/// Load a source file into a LineBuffer
pub fn load_file(path: impl AsRef<Path>) -> Result<LineBuffer> {
    let buffer = LineBuffer::from_file(path.as_ref())?;
    debug!(path = %path.as_ref().display(), lines = buffer.line_count(), "file loaded");
    Ok(buffer)
}

/// Save a LineBuffer to its file path
pub fn save_file(buffer: &mut LineBuffer) -> Result<()> {
    buffer.save()
}

/// Save a LineBuffer to a specific file
pub fn save_file_as(buffer: &mut LineBuffer, path: impl AsRef<Path>) -> Result<()> {
    buffer.save_as(path)
}
