//! Structural navigator: one entry point per user-facing action.
//!
//! Entry points read the attached buffer, apply the resulting caret move or
//! selection through [`BufferAccess`], and describe what happened in an
//! [`Outcome`] for the host to announce. Expected misses (nothing found, no
//! buffer attached) are outcomes; only [`NavError::InvalidState`] comes back
//! as an error.

use tracing::{debug, info, warn};

use crate::document::{
    BufferAccess, CaretPlacement, DeclarationKind, Direction, LineAnalyzer, Position,
};
use crate::error::{NavError, NavResult};
use crate::navigation::{self, Block};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeStatus {
    Moved,
    Selected,
    Deleted,
    Cancelled,
    Executed,
    NotFound,
    NoActiveBuffer,
}

/// Result of a navigator command, ready to be announced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub message: String,
    /// Where the caret ended up, when the command moved it
    pub new_caret: Option<Position>,
    pub status: OutcomeStatus,
}

impl Outcome {
    pub fn new(
        status: OutcomeStatus,
        message: impl Into<String>,
        new_caret: Option<Position>,
    ) -> Self {
        Self {
            message: message.into(),
            new_caret,
            status,
        }
    }

    pub fn moved(message: impl Into<String>, caret: Position) -> Self {
        Self::new(OutcomeStatus::Moved, message, Some(caret))
    }

    pub fn selected(message: impl Into<String>, caret: Position) -> Self {
        Self::new(OutcomeStatus::Selected, message, Some(caret))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(OutcomeStatus::NotFound, message, None)
    }

    pub fn no_active_buffer() -> Self {
        Self::new(OutcomeStatus::NoActiveBuffer, "no active document", None)
    }

    /// Whether the command found and acted on something
    pub fn is_success(&self) -> bool {
        matches!(
            self.status,
            OutcomeStatus::Moved
                | OutcomeStatus::Selected
                | OutcomeStatus::Deleted
                | OutcomeStatus::Executed
        )
    }
}

/// What the host shows when asking to confirm a deletion
#[derive(Debug, Clone, Copy)]
pub struct DeletePrompt<'a> {
    pub kind: DeclarationKind,
    pub block: &'a Block,
}

impl DeletePrompt<'_> {
    pub fn title(&self) -> &'static str {
        "Delete confirmation"
    }

    pub fn question(&self) -> String {
        format!("Do you really want to delete this {}?", self.kind)
    }
}

/// Whether the host currently has a document for the navigator
#[derive(Debug)]
pub enum Attachment<B> {
    Detached,
    Attached(B),
}

#[derive(Debug)]
pub struct StructuralNavigator<B> {
    attachment: Attachment<B>,
}

impl<B: BufferAccess> StructuralNavigator<B> {
    pub fn new() -> Self {
        Self {
            attachment: Attachment::Detached,
        }
    }

    pub fn with_buffer(buffer: B) -> Self {
        Self {
            attachment: Attachment::Attached(buffer),
        }
    }

    /// Attach a buffer, returning the one it replaces
    pub fn attach(&mut self, buffer: B) -> Option<B> {
        match std::mem::replace(&mut self.attachment, Attachment::Attached(buffer)) {
            Attachment::Attached(previous) => Some(previous),
            Attachment::Detached => None,
        }
    }

    pub fn detach(&mut self) -> Option<B> {
        match std::mem::replace(&mut self.attachment, Attachment::Detached) {
            Attachment::Attached(buffer) => Some(buffer),
            Attachment::Detached => None,
        }
    }

    pub fn is_attached(&self) -> bool {
        matches!(self.attachment, Attachment::Attached(_))
    }

    pub fn buffer(&self) -> Option<&B> {
        match &self.attachment {
            Attachment::Attached(buffer) => Some(buffer),
            Attachment::Detached => None,
        }
    }

    pub fn buffer_mut(&mut self) -> Option<&mut B> {
        match &mut self.attachment {
            Attachment::Attached(buffer) => Some(buffer),
            Attachment::Detached => None,
        }
    }

    fn run<F>(&mut self, action: &'static str, command: F) -> NavResult<Outcome>
    where
        F: FnOnce(&mut B) -> NavResult<Outcome>,
    {
        let Attachment::Attached(buffer) = &mut self.attachment else {
            debug!(action, "no buffer attached");
            return Ok(Outcome::no_active_buffer());
        };

        match command(buffer) {
            Ok(outcome) => {
                debug!(
                    action,
                    message = %outcome.message,
                    caret = ?outcome.new_caret,
                    "command done"
                );
                Ok(outcome)
            }
            Err(NavError::NotFound { message }) => {
                debug!(action, %message, "nothing found");
                Ok(Outcome::not_found(message))
            }
            Err(NavError::NoActiveBuffer) => Ok(Outcome::no_active_buffer()),
            Err(err) => {
                warn!(action, error = %err, "command failed");
                Err(err)
            }
        }
    }

    pub fn move_to_next_function(&mut self) -> NavResult<Outcome> {
        self.run("move_to_next_function", |buffer| {
            move_to_declaration(buffer, DeclarationKind::Function, Direction::Forward)
        })
    }

    pub fn move_to_previous_function(&mut self) -> NavResult<Outcome> {
        self.run("move_to_previous_function", |buffer| {
            move_to_declaration(buffer, DeclarationKind::Function, Direction::Backward)
        })
    }

    pub fn move_to_next_class(&mut self) -> NavResult<Outcome> {
        self.run("move_to_next_class", |buffer| {
            move_to_declaration(buffer, DeclarationKind::Class, Direction::Forward)
        })
    }

    pub fn move_to_previous_class(&mut self) -> NavResult<Outcome> {
        self.run("move_to_previous_class", |buffer| {
            move_to_declaration(buffer, DeclarationKind::Class, Direction::Backward)
        })
    }

    pub fn select_current_class(&mut self) -> NavResult<Outcome> {
        self.run("select_current_class", |buffer| {
            select_current(buffer, DeclarationKind::Class)
        })
    }

    pub fn select_class(&mut self) -> NavResult<Outcome> {
        self.run("select_class", |buffer| {
            select_declaration(buffer, DeclarationKind::Class)
        })
    }

    pub fn select_current_function(&mut self) -> NavResult<Outcome> {
        self.run("select_current_function", |buffer| {
            select_current(buffer, DeclarationKind::Function)
        })
    }

    pub fn select_function(&mut self) -> NavResult<Outcome> {
        self.run("select_function", |buffer| {
            select_declaration(buffer, DeclarationKind::Function)
        })
    }

    pub fn delete_current_class<F>(&mut self, confirm: F) -> NavResult<Outcome>
    where
        F: FnOnce(&DeletePrompt<'_>) -> bool,
    {
        self.run("delete_current_class", |buffer| {
            delete_current(buffer, DeclarationKind::Class, confirm)
        })
    }

    pub fn delete_current_function<F>(&mut self, confirm: F) -> NavResult<Outcome>
    where
        F: FnOnce(&DeletePrompt<'_>) -> bool,
    {
        self.run("delete_current_function", |buffer| {
            delete_current(buffer, DeclarationKind::Function, confirm)
        })
    }

    pub fn move_to_next_indent_level(&mut self) -> NavResult<Outcome> {
        self.run("move_to_next_indent_level", |buffer| {
            move_to_indent_level(buffer, Direction::Forward)
        })
    }

    pub fn move_to_previous_indent_level(&mut self) -> NavResult<Outcome> {
        self.run("move_to_previous_indent_level", |buffer| {
            move_to_indent_level(buffer, Direction::Backward)
        })
    }

    pub fn move_to_next_indented_line(&mut self) -> NavResult<Outcome> {
        self.run("move_to_next_indented_line", |buffer| {
            move_to_indented_line(buffer, Direction::Forward)
        })
    }

    pub fn move_to_previous_indented_line(&mut self) -> NavResult<Outcome> {
        self.run("move_to_previous_indented_line", |buffer| {
            move_to_indented_line(buffer, Direction::Backward)
        })
    }

    pub fn select_to_next_indent_level(&mut self) -> NavResult<Outcome> {
        self.run("select_to_next_indent_level", |buffer| {
            select_to_indent_level(buffer, Direction::Forward)
        })
    }

    pub fn select_to_previous_indent_level(&mut self) -> NavResult<Outcome> {
        self.run("select_to_previous_indent_level", |buffer| {
            select_to_indent_level(buffer, Direction::Backward)
        })
    }

    pub fn move_to_first_line_in_indentation(&mut self) -> NavResult<Outcome> {
        self.run("move_to_first_line_in_indentation", |buffer| {
            move_to_run_edge(buffer, Direction::Backward)
        })
    }

    pub fn move_to_last_line_in_indentation(&mut self) -> NavResult<Outcome> {
        self.run("move_to_last_line_in_indentation", |buffer| {
            move_to_run_edge(buffer, Direction::Forward)
        })
    }
}

impl<B: BufferAccess> Default for StructuralNavigator<B> {
    fn default() -> Self {
        Self::new()
    }
}

fn relative(direction: Direction) -> &'static str {
    match direction {
        Direction::Forward => "next",
        Direction::Backward => "previous",
    }
}

fn move_to_declaration<B: BufferAccess>(
    buffer: &mut B,
    kind: DeclarationKind,
    direction: Direction,
) -> NavResult<Outcome> {
    let cursor = buffer.cursor_line()?;
    let found = navigation::find_declaration(buffer, cursor.position, kind, direction)?;
    let Some(line) = found else {
        let message = format!("no {} {kind} declaration found", relative(direction));
        return Err(NavError::not_found(message));
    };

    buffer.place_caret(line.position)?;
    Ok(Outcome::moved(line.trimmed(), line.position))
}

fn apply_block_selection<B: BufferAccess>(buffer: &mut B, block: &Block) -> NavResult<()> {
    buffer.set_selection(block.start(), block.end, CaretPlacement::End)
}

fn select_current<B: BufferAccess>(buffer: &mut B, kind: DeclarationKind) -> NavResult<Outcome> {
    let block = navigation::block_extent_at_cursor(buffer, kind)?;
    apply_block_selection(buffer, &block)?;
    Ok(Outcome::selected(
        format!("{kind} selected, {} lines selected", block.line_count()),
        block.end,
    ))
}

fn select_declaration<B: BufferAccess>(
    buffer: &mut B,
    kind: DeclarationKind,
) -> NavResult<Outcome> {
    let cursor = buffer.cursor_line()?;
    if !LineAnalyzer::is_declaration(&cursor.text, kind) {
        return Err(NavError::not_found(format!(
            "cursor is not on a {kind} declaration"
        )));
    }

    let block = navigation::block_extent(buffer, cursor.position)?;
    apply_block_selection(buffer, &block)?;
    Ok(Outcome::selected(format!("{kind} selected"), block.end))
}

fn delete_current<B, F>(buffer: &mut B, kind: DeclarationKind, confirm: F) -> NavResult<Outcome>
where
    B: BufferAccess,
    F: FnOnce(&DeletePrompt<'_>) -> bool,
{
    let block = navigation::block_extent_at_cursor(buffer, kind)?;
    apply_block_selection(buffer, &block)?;
    let revision = buffer.revision();

    if !confirm(&DeletePrompt { kind, block: &block }) {
        debug!(%kind, start = %block.start(), "deletion declined");
        return Ok(Outcome::new(
            OutcomeStatus::Cancelled,
            "deletion cancelled",
            Some(block.end),
        ));
    }

    // The range must still describe the same block after the prompt
    if buffer.revision() != revision {
        return Err(NavError::invalid_state(
            "buffer was edited while the deletion was being confirmed",
        ));
    }
    let fresh = navigation::block_extent(buffer, block.start())?;
    if fresh != block {
        return Err(NavError::invalid_state(format!(
            "{kind} block at {} no longer matches the confirmed range",
            block.start()
        )));
    }

    apply_block_selection(buffer, &fresh)?;
    let removed = buffer.delete_selection()?;
    info!(%kind, start = %fresh.start(), removed, "block deleted");

    let caret = buffer.cursor_line()?.position;
    Ok(Outcome::new(
        OutcomeStatus::Deleted,
        format!("{kind} deleted, {removed} lines deleted"),
        Some(caret),
    ))
}

fn move_to_indent_level<B: BufferAccess>(
    buffer: &mut B,
    direction: Direction,
) -> NavResult<Outcome> {
    let found = match direction {
        Direction::Forward => navigation::next_different_indent(buffer)?,
        Direction::Backward => navigation::previous_different_indent(buffer)?,
    };
    let line = found.ok_or_else(|| {
        NavError::not_found(match direction {
            Direction::Forward => "end of document reached",
            Direction::Backward => "no previous indentation level found",
        })
    })?;

    buffer.place_caret(line.position)?;
    let level = LineAnalyzer::indent_level(&line.text);
    Ok(Outcome::moved(format!("indentation {level}"), line.position))
}

fn move_to_indented_line<B: BufferAccess>(
    buffer: &mut B,
    direction: Direction,
) -> NavResult<Outcome> {
    let found = match direction {
        Direction::Forward => navigation::next_equal_indent(buffer)?,
        Direction::Backward => navigation::previous_equal_indent(buffer)?,
    };
    let line = found.ok_or_else(|| {
        NavError::not_found(match direction {
            Direction::Forward => "end of document reached",
            Direction::Backward => "start of document reached",
        })
    })?;

    buffer.place_caret(line.position)?;
    Ok(Outcome::moved(
        format!(
            "{} line at same indentation: {}",
            relative(direction),
            line.trimmed()
        ),
        line.position,
    ))
}

fn select_to_indent_level<B: BufferAccess>(
    buffer: &mut B,
    direction: Direction,
) -> NavResult<Outcome> {
    let cursor = buffer.cursor_line()?;
    let found = match direction {
        Direction::Forward => navigation::next_different_indent(buffer)?,
        Direction::Backward => navigation::previous_different_indent(buffer)?,
    };
    let line = found.ok_or_else(|| {
        NavError::not_found(format!(
            "no {} indentation level found",
            relative(direction)
        ))
    })?;

    let (start, end, caret) = match direction {
        Direction::Forward => (cursor.position, line.position, CaretPlacement::End),
        Direction::Backward => (line.position, cursor.position, CaretPlacement::Start),
    };
    buffer.set_selection(start, end, caret)?;
    Ok(Outcome::selected(
        format!(
            "selection to {} indentation level: {}",
            relative(direction),
            line.trimmed()
        ),
        line.position,
    ))
}

fn move_to_run_edge<B: BufferAccess>(buffer: &mut B, direction: Direction) -> NavResult<Outcome> {
    let (line, which) = match direction {
        Direction::Backward => (navigation::first_line_at_current_indent(buffer)?, "first"),
        Direction::Forward => (navigation::last_line_at_current_indent(buffer)?, "last"),
    };

    buffer.place_caret(line.position)?;
    Ok(Outcome::moved(
        format!("{which} line of indentation level: {}", line.trimmed()),
        line.position,
    ))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::document::{Line, LineBuffer};

    fn scenario() -> LineBuffer {
        LineBuffer::from_lines([
            "class A:",
            "    def f():",
            "        x=1",
            "",
            "    def g():",
            "        y=2",
            "z=0",
        ])
    }

    fn navigator_at(line: usize) -> StructuralNavigator<LineBuffer> {
        let mut buffer = scenario();
        buffer.set_cursor_line(line);
        StructuralNavigator::with_buffer(buffer)
    }

    fn buffer(navigator: &StructuralNavigator<LineBuffer>) -> &LineBuffer {
        navigator.buffer().unwrap()
    }

    #[test]
    fn test_detached_navigator_is_a_no_op() {
        let mut navigator: StructuralNavigator<LineBuffer> = StructuralNavigator::new();
        assert!(!navigator.is_attached());

        let outcome = navigator.move_to_next_function().unwrap();
        assert_eq!(outcome.status, OutcomeStatus::NoActiveBuffer);
        assert_eq!(outcome.message, "no active document");
        assert_eq!(outcome.new_caret, None);

        let outcome = navigator.delete_current_class(|_| true).unwrap();
        assert_eq!(outcome.status, OutcomeStatus::NoActiveBuffer);
    }

    #[test]
    fn test_attach_and_detach() {
        let mut navigator = StructuralNavigator::new();
        assert!(navigator.attach(scenario()).is_none());
        assert!(navigator.is_attached());
        assert!(navigator.attach(LineBuffer::new()).is_some());

        let detached = navigator.detach().unwrap();
        assert_eq!(detached.line_count(), 1);
        assert!(navigator.detach().is_none());
        assert_eq!(
            navigator.move_to_next_class().unwrap().status,
            OutcomeStatus::NoActiveBuffer
        );
    }

    #[test]
    fn test_move_to_next_function() {
        let mut navigator = navigator_at(0);
        let outcome = navigator.move_to_next_function().unwrap();
        assert_eq!(outcome.status, OutcomeStatus::Moved);
        assert_eq!(outcome.message, "def f():");
        assert_eq!(outcome.new_caret, Some(Position::new(1)));
        assert_eq!(buffer(&navigator).cursor().line, 1);
        assert_eq!(buffer(&navigator).cursor().column, 4);

        let outcome = navigator.move_to_next_function().unwrap();
        assert_eq!(outcome.message, "def g():");
    }

    #[test]
    fn test_move_to_next_function_at_end_of_buffer() {
        let mut navigator = navigator_at(6);
        let outcome = navigator.move_to_next_function().unwrap();
        assert_eq!(outcome.status, OutcomeStatus::NotFound);
        assert_eq!(outcome.message, "no next function declaration found");
        assert_eq!(outcome.new_caret, None);
        assert_eq!(buffer(&navigator).cursor().line, 6);
    }

    #[test]
    fn test_move_to_previous_declarations() {
        let mut navigator = navigator_at(5);
        assert_eq!(
            navigator.move_to_previous_function().unwrap().new_caret,
            Some(Position::new(4))
        );
        assert_eq!(
            navigator.move_to_previous_function().unwrap().new_caret,
            Some(Position::new(1))
        );
        let outcome = navigator.move_to_previous_function().unwrap();
        assert_eq!(outcome.message, "no previous function declaration found");

        let outcome = navigator.move_to_previous_class().unwrap();
        assert_eq!(outcome.message, "class A:");
        let outcome = navigator.move_to_next_class().unwrap();
        assert_eq!(outcome.message, "no next class declaration found");
    }

    #[test]
    fn test_select_current_function() {
        let mut navigator = navigator_at(2);
        let outcome = navigator.select_current_function().unwrap();
        assert_eq!(outcome.status, OutcomeStatus::Selected);
        assert_eq!(outcome.message, "function selected, 3 lines selected");

        let selection = buffer(&navigator).selection().unwrap();
        assert_eq!(selection.start(), Position::new(1));
        assert_eq!(selection.end(), Position::new(3));
        assert_eq!(
            buffer(&navigator).selected_text().as_deref(),
            Some("    def f():\n        x=1\n")
        );
    }

    #[test]
    fn test_select_current_class() {
        let mut navigator = navigator_at(2);
        let outcome = navigator.select_current_class().unwrap();
        assert_eq!(outcome.message, "class selected, 6 lines selected");
        assert_eq!(outcome.new_caret, Some(Position::new(5)));

        let text = buffer(&navigator).selected_text().unwrap();
        assert!(text.starts_with("class A:"));
        assert!(text.ends_with("        y=2"));
        assert!(!text.contains("z=0"));
    }

    #[test]
    fn test_select_current_without_declaration() {
        let mut buffer = LineBuffer::from_lines(["x = 1", "y = 2"]);
        buffer.set_cursor_line(1);
        let mut navigator = StructuralNavigator::with_buffer(buffer);
        let outcome = navigator.select_current_class().unwrap();
        assert_eq!(outcome.status, OutcomeStatus::NotFound);
        assert_eq!(outcome.message, "no class declaration found");
        assert!(navigator.buffer().unwrap().selection().is_none());
    }

    #[test]
    fn test_select_function_requires_declaration_line() {
        let mut navigator = navigator_at(2);
        let outcome = navigator.select_function().unwrap();
        assert_eq!(outcome.status, OutcomeStatus::NotFound);
        assert_eq!(outcome.message, "cursor is not on a function declaration");

        let mut navigator = navigator_at(4);
        let outcome = navigator.select_function().unwrap();
        assert_eq!(outcome.message, "function selected");
        assert_eq!(
            buffer(&navigator).selected_text().as_deref(),
            Some("    def g():\n        y=2")
        );

        let mut navigator = navigator_at(0);
        assert_eq!(navigator.select_class().unwrap().message, "class selected");
    }

    #[test]
    fn test_delete_current_class_cancelled() {
        let mut navigator = navigator_at(2);
        let mut asked = None;
        let outcome = navigator
            .delete_current_class(|prompt| {
                assert_eq!(prompt.title(), "Delete confirmation");
                asked = Some(prompt.question());
                false
            })
            .unwrap();

        assert_eq!(outcome.status, OutcomeStatus::Cancelled);
        assert_eq!(outcome.message, "deletion cancelled");
        assert_eq!(
            asked.as_deref(),
            Some("Do you really want to delete this class?")
        );
        assert_eq!(buffer(&navigator).lines(), scenario().lines());
        assert!(!buffer(&navigator).is_modified());
    }

    #[test]
    fn test_delete_current_function_confirmed() {
        let mut navigator = navigator_at(5);
        let outcome = navigator
            .delete_current_function(|prompt| {
                assert_eq!(prompt.kind, DeclarationKind::Function);
                assert_eq!(prompt.block.start(), Position::new(4));
                true
            })
            .unwrap();

        assert_eq!(outcome.status, OutcomeStatus::Deleted);
        assert_eq!(outcome.message, "function deleted, 2 lines deleted");
        assert_eq!(
            buffer(&navigator).lines(),
            &["class A:", "    def f():", "        x=1", "", "z=0"]
        );
        assert_eq!(outcome.new_caret, Some(Position::new(4)));
    }

    #[test]
    fn test_delete_current_class_confirmed() {
        let mut navigator = navigator_at(0);
        let outcome = navigator.delete_current_class(|_| true).unwrap();
        assert_eq!(outcome.message, "class deleted, 6 lines deleted");
        assert_eq!(buffer(&navigator).lines(), &["z=0"]);
    }

    #[test]
    fn test_delete_not_found_never_prompts() {
        let mut buffer = LineBuffer::from_lines(["x = 1"]);
        buffer.set_cursor_line(0);
        let mut navigator = StructuralNavigator::with_buffer(buffer);
        let outcome = navigator
            .delete_current_function(|_| panic!("prompted without a block"))
            .unwrap();
        assert_eq!(outcome.status, OutcomeStatus::NotFound);
    }

    /// Buffer that reports an edit once the host has shown the prompt
    struct EditedDuringPrompt {
        inner: LineBuffer,
        edited: Rc<Cell<bool>>,
    }

    impl BufferAccess for EditedDuringPrompt {
        fn cursor_line(&self) -> NavResult<Line> {
            self.inner.cursor_line()
        }
        fn line_at(&self, position: Position) -> NavResult<Line> {
            self.inner.line_at(position)
        }
        fn step_line(&self, position: Position, direction: Direction) -> Position {
            self.inner.step_line(position, direction)
        }
        fn set_selection(
            &mut self,
            start: Position,
            end: Position,
            caret: CaretPlacement,
        ) -> NavResult<()> {
            self.inner.set_selection(start, end, caret)
        }
        fn place_caret(&mut self, position: Position) -> NavResult<()> {
            self.inner.place_caret(position)
        }
        fn selected_text(&self) -> Option<String> {
            self.inner.selected_text()
        }
        fn whole_document_text(&self) -> String {
            self.inner.whole_document_text()
        }
        fn delete_selection(&mut self) -> NavResult<usize> {
            self.inner.delete_selection()
        }
        fn revision(&self) -> u64 {
            self.inner.revision() + u64::from(self.edited.get())
        }
    }

    #[test]
    fn test_delete_detects_edit_during_prompt() {
        let mut inner = scenario();
        inner.set_cursor_line(2);
        let edited = Rc::new(Cell::new(false));
        let mut navigator = StructuralNavigator::with_buffer(EditedDuringPrompt {
            inner,
            edited: Rc::clone(&edited),
        });

        let err = navigator
            .delete_current_function(|_| {
                edited.set(true);
                true
            })
            .unwrap_err();
        assert!(matches!(err, NavError::InvalidState { .. }));
        assert_eq!(navigator.buffer().unwrap().inner.line_count(), 7);
    }

    #[test]
    fn test_move_to_indent_levels() {
        let mut navigator = navigator_at(1);
        let outcome = navigator.move_to_next_indent_level().unwrap();
        assert_eq!(outcome.message, "indentation 8");
        assert_eq!(outcome.new_caret, Some(Position::new(2)));

        let outcome = navigator.move_to_previous_indent_level().unwrap();
        assert_eq!(outcome.message, "indentation 4");
        assert_eq!(outcome.new_caret, Some(Position::new(1)));

        let mut navigator = navigator_at(6);
        assert_eq!(
            navigator.move_to_next_indent_level().unwrap().message,
            "end of document reached"
        );
        let mut navigator = navigator_at(0);
        assert_eq!(
            navigator.move_to_previous_indent_level().unwrap().message,
            "no previous indentation level found"
        );
    }

    #[test]
    fn test_move_to_indented_lines() {
        let mut navigator = navigator_at(1);
        let outcome = navigator.move_to_next_indented_line().unwrap();
        assert_eq!(outcome.message, "next line at same indentation: def g():");
        assert_eq!(outcome.new_caret, Some(Position::new(4)));

        let outcome = navigator.move_to_previous_indented_line().unwrap();
        assert_eq!(
            outcome.message,
            "previous line at same indentation: def f():"
        );

        let outcome = navigator.move_to_previous_indented_line().unwrap();
        assert_eq!(outcome.message, "start of document reached");
        assert_eq!(buffer(&navigator).cursor().line, 1);

        let mut navigator = navigator_at(6);
        assert_eq!(
            navigator.move_to_next_indented_line().unwrap().message,
            "end of document reached"
        );
    }

    #[test]
    fn test_select_to_next_indent_level() {
        let mut navigator = navigator_at(4);
        let outcome = navigator.select_to_next_indent_level().unwrap();
        assert_eq!(outcome.message, "selection to next indentation level: y=2");

        let selection = buffer(&navigator).selection().unwrap();
        assert_eq!(selection.start(), Position::new(4));
        assert_eq!(selection.end(), Position::new(5));
        assert_eq!(selection.focus, Position::new(5));
    }

    #[test]
    fn test_select_to_previous_indent_level() {
        let mut navigator = navigator_at(5);
        let outcome = navigator.select_to_previous_indent_level().unwrap();
        assert_eq!(
            outcome.message,
            "selection to previous indentation level: def g():"
        );

        let selection = buffer(&navigator).selection().unwrap();
        assert_eq!(selection.start(), Position::new(4));
        assert_eq!(selection.end(), Position::new(5));
        assert_eq!(selection.focus, Position::new(4));
        assert_eq!(buffer(&navigator).cursor().line, 4);

        let mut navigator = navigator_at(0);
        assert_eq!(
            navigator.select_to_previous_indent_level().unwrap().message,
            "no previous indentation level found"
        );
    }

    #[test]
    fn test_move_to_first_and_last_line_in_indentation() {
        let mut buffer = LineBuffer::from_lines([
            "def f():",
            "    a = 1",
            "    b = 2",
            "    c = 3",
            "x",
        ]);
        buffer.set_cursor_line(2);
        let mut navigator = StructuralNavigator::with_buffer(buffer);

        let outcome = navigator.move_to_first_line_in_indentation().unwrap();
        assert_eq!(outcome.message, "first line of indentation level: a = 1");
        assert_eq!(outcome.new_caret, Some(Position::new(1)));

        let outcome = navigator.move_to_last_line_in_indentation().unwrap();
        assert_eq!(outcome.message, "last line of indentation level: c = 3");
        assert_eq!(outcome.new_caret, Some(Position::new(3)));
    }

    #[test]
    fn test_outcome_success() {
        assert!(Outcome::moved("x", Position::START).is_success());
        assert!(!Outcome::not_found("x").is_success());
        assert!(!Outcome::no_active_buffer().is_success());
    }
}
