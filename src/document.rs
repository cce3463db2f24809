pub mod access;
pub mod buffer;
pub mod cursor;
pub mod line_analyzer;

pub use access::BufferAccess;
pub use buffer::LineBuffer;
pub use cursor::{CaretPlacement, Cursor, Direction, Line, Position, Selection};
pub use line_analyzer::{DeclarationKind, LineAnalyzer, TAB_WIDTH};
