use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// User-facing actions a key binding or the command line can trigger
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum NavCommand {
    MoveToNextFunction,
    MoveToPreviousFunction,
    MoveToNextClass,
    MoveToPreviousClass,
    SelectCurrentClass,
    SelectClass,
    SelectCurrentFunction,
    SelectFunction,
    DeleteCurrentClass,
    DeleteCurrentFunction,
    RunCode,
    MoveToNextIndentLevel,
    MoveToPreviousIndentLevel,
    MoveToNextIndentedLine,
    MoveToPreviousIndentedLine,
    SelectToNextIndentLevel,
    SelectToPreviousIndentLevel,
    MoveToFirstLineInIndentation,
    MoveToLastLineInIndentation,
}

impl NavCommand {
    /// Kebab-case name used in config files and on the command line
    pub fn name(self) -> &'static str {
        match self {
            NavCommand::MoveToNextFunction => "move-to-next-function",
            NavCommand::MoveToPreviousFunction => "move-to-previous-function",
            NavCommand::MoveToNextClass => "move-to-next-class",
            NavCommand::MoveToPreviousClass => "move-to-previous-class",
            NavCommand::SelectCurrentClass => "select-current-class",
            NavCommand::SelectClass => "select-class",
            NavCommand::SelectCurrentFunction => "select-current-function",
            NavCommand::SelectFunction => "select-function",
            NavCommand::DeleteCurrentClass => "delete-current-class",
            NavCommand::DeleteCurrentFunction => "delete-current-function",
            NavCommand::RunCode => "run-code",
            NavCommand::MoveToNextIndentLevel => "move-to-next-indent-level",
            NavCommand::MoveToPreviousIndentLevel => "move-to-previous-indent-level",
            NavCommand::MoveToNextIndentedLine => "move-to-next-indented-line",
            NavCommand::MoveToPreviousIndentedLine => "move-to-previous-indented-line",
            NavCommand::SelectToNextIndentLevel => "select-to-next-indent-level",
            NavCommand::SelectToPreviousIndentLevel => "select-to-previous-indent-level",
            NavCommand::MoveToFirstLineInIndentation => "move-to-first-line-in-indentation",
            NavCommand::MoveToLastLineInIndentation => "move-to-last-line-in-indentation",
        }
    }

    /// One-line help text shown when listing bindings
    pub fn description(self) -> &'static str {
        match self {
            NavCommand::MoveToNextFunction => "Move to the next function declaration",
            NavCommand::MoveToPreviousFunction => "Move to the previous function declaration",
            NavCommand::MoveToNextClass => "Move to the next class declaration",
            NavCommand::MoveToPreviousClass => "Move to the previous class declaration",
            NavCommand::SelectCurrentClass => "Select the class containing the cursor",
            NavCommand::SelectClass => "Select the class declared on the cursor line",
            NavCommand::SelectCurrentFunction => "Select the function containing the cursor",
            NavCommand::SelectFunction => "Select the function declared on the cursor line",
            NavCommand::DeleteCurrentClass => "Delete the class containing the cursor",
            NavCommand::DeleteCurrentFunction => "Delete the function containing the cursor",
            NavCommand::RunCode => "Run the selection or the whole file in an interpreter",
            NavCommand::MoveToNextIndentLevel => "Move to the next change of indentation",
            NavCommand::MoveToPreviousIndentLevel => "Move to the previous change of indentation",
            NavCommand::MoveToNextIndentedLine => "Move to the next line at the same indentation",
            NavCommand::MoveToPreviousIndentedLine => {
                "Move to the previous line at the same indentation"
            }
            NavCommand::SelectToNextIndentLevel => "Select down to the next change of indentation",
            NavCommand::SelectToPreviousIndentLevel => {
                "Select up to the previous change of indentation"
            }
            NavCommand::MoveToFirstLineInIndentation => {
                "Move to the first line of the current indentation"
            }
            NavCommand::MoveToLastLineInIndentation => {
                "Move to the last line of the current indentation"
            }
        }
    }

    /// Whether the command may remove text from the buffer
    pub fn is_destructive(self) -> bool {
        matches!(
            self,
            NavCommand::DeleteCurrentClass | NavCommand::DeleteCurrentFunction
        )
    }
}
