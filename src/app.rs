use std::path::Path;

use miette::Result;
use tracing::debug;

use crate::command::NavCommand;
use crate::config::Config;
use crate::document::LineBuffer;
use crate::file;
use crate::navigator::{DeletePrompt, Outcome, OutcomeStatus, StructuralNavigator};
use crate::runner::CodeRunner;

/// Main application state
pub struct App {
    /// Navigator over the open document
    navigator: StructuralNavigator<LineBuffer>,
    /// Application configuration
    config: Config,
    /// Interpreter launcher for run-code
    runner: CodeRunner,
}

impl App {
    /// Create an app with no document open
    pub fn new(config: Config) -> Self {
        let runner = CodeRunner::new(config.runner.clone());
        Self {
            navigator: StructuralNavigator::new(),
            config,
            runner,
        }
    }

    pub fn with_buffer(buffer: LineBuffer, config: Config) -> Self {
        let mut app = Self::new(config);
        app.navigator.attach(buffer);
        app
    }

    /// Create app with file
    pub fn from_file(path: impl AsRef<Path>, config: Config) -> Result<Self> {
        let buffer = file::load_file(path)?;
        Ok(Self::with_buffer(buffer, config))
    }

    /// Get the open document, if any
    pub fn buffer(&self) -> Option<&LineBuffer> {
        self.navigator.buffer()
    }

    pub fn buffer_mut(&mut self) -> Option<&mut LineBuffer> {
        self.navigator.buffer_mut()
    }

    /// Run a command against the open document.
    ///
    /// `confirm` is asked before a block is deleted, unless deletions are
    /// configured to go through unconfirmed.
    pub fn execute<F>(&mut self, command: NavCommand, confirm: F) -> Result<Outcome>
    where
        F: FnOnce(&DeletePrompt<'_>) -> bool,
    {
        debug!(command = command.name(), "executing");

        let ask = self.config.navigator.confirm_deletions;
        let confirm = |prompt: &DeletePrompt<'_>| !ask || confirm(prompt);

        let navigator = &mut self.navigator;
        let outcome = match command {
            NavCommand::MoveToNextFunction => navigator.move_to_next_function()?,
            NavCommand::MoveToPreviousFunction => navigator.move_to_previous_function()?,
            NavCommand::MoveToNextClass => navigator.move_to_next_class()?,
            NavCommand::MoveToPreviousClass => navigator.move_to_previous_class()?,
            NavCommand::SelectCurrentClass => navigator.select_current_class()?,
            NavCommand::SelectClass => navigator.select_class()?,
            NavCommand::SelectCurrentFunction => navigator.select_current_function()?,
            NavCommand::SelectFunction => navigator.select_function()?,
            NavCommand::DeleteCurrentClass => navigator.delete_current_class(confirm)?,
            NavCommand::DeleteCurrentFunction => navigator.delete_current_function(confirm)?,
            NavCommand::RunCode => self.run_code()?,
            NavCommand::MoveToNextIndentLevel => navigator.move_to_next_indent_level()?,
            NavCommand::MoveToPreviousIndentLevel => navigator.move_to_previous_indent_level()?,
            NavCommand::MoveToNextIndentedLine => navigator.move_to_next_indented_line()?,
            NavCommand::MoveToPreviousIndentedLine => {
                navigator.move_to_previous_indented_line()?
            }
            NavCommand::SelectToNextIndentLevel => navigator.select_to_next_indent_level()?,
            NavCommand::SelectToPreviousIndentLevel => {
                navigator.select_to_previous_indent_level()?
            }
            NavCommand::MoveToFirstLineInIndentation => {
                navigator.move_to_first_line_in_indentation()?
            }
            NavCommand::MoveToLastLineInIndentation => {
                navigator.move_to_last_line_in_indentation()?
            }
        };

        Ok(outcome)
    }

    /// Resolve a key chord through the binding table and run its command
    pub fn press<F>(&mut self, chord: &str, confirm: F) -> Result<Outcome>
    where
        F: FnOnce(&DeletePrompt<'_>) -> bool,
    {
        let command = self
            .config
            .keybindings
            .command_for(chord)
            .ok_or_else(|| miette::miette!("No command is bound to '{}'", chord))?;
        self.execute(command, confirm)
    }

    fn run_code(&self) -> Result<Outcome> {
        let Some(buffer) = self.navigator.buffer() else {
            return Ok(Outcome::no_active_buffer());
        };

        let script = self.runner.run(buffer)?;
        Ok(Outcome::new(
            OutcomeStatus::Executed,
            format!("code executed in {}", script.path.display()),
            None,
        ))
    }

    /// Write the open document back to its file
    pub fn save(&mut self) -> Result<()> {
        let buffer = self
            .navigator
            .buffer_mut()
            .ok_or_else(|| miette::miette!("No document is open"))?;
        file::save_file(buffer)
    }
}
