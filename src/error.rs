use miette::Diagnostic;
use thiserror::Error;

use crate::document::Position;

/// Failures reported by the navigator and by buffer access.
///
/// `NotFound` and `NoActiveBuffer` are expected and become an
/// [`Outcome`](crate::Outcome) at the API boundary. `InvalidState` is the only
/// variant that reaches the host as an error.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum NavError {
    #[error("{message}")]
    #[diagnostic(code(indent_nav::not_found))]
    NotFound { message: String },

    #[error("no active document")]
    #[diagnostic(
        code(indent_nav::no_active_buffer),
        help("attach a buffer before running navigation commands")
    )]
    NoActiveBuffer,

    #[error("buffer changed underneath the navigator: {reason}")]
    #[diagnostic(
        code(indent_nav::invalid_state),
        help("the buffer was modified while a command was running; run the command again")
    )]
    InvalidState { reason: String },
}

impl NavError {
    pub fn not_found(message: impl Into<String>) -> Self {
        NavError::NotFound {
            message: message.into(),
        }
    }

    pub fn invalid_state(reason: impl Into<String>) -> Self {
        NavError::InvalidState {
            reason: reason.into(),
        }
    }

    pub fn stale_position(position: Position, line_count: usize) -> Self {
        Self::invalid_state(format!(
            "{position} is past the end of a {line_count}-line buffer"
        ))
    }
}

pub type NavResult<T> = std::result::Result<T, NavError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            NavError::not_found("no next function declaration found").to_string(),
            "no next function declaration found"
        );
        assert_eq!(NavError::NoActiveBuffer.to_string(), "no active document");
        assert_eq!(
            NavError::stale_position(Position::new(9), 3).to_string(),
            "buffer changed underneath the navigator: line 10 is past the end of a 3-line buffer"
        );
    }
}
