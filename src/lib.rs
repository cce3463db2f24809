pub mod app;
pub mod command;
pub mod config;
pub mod document;
pub mod error;
pub mod file;
pub mod logging;
pub mod navigation;
pub mod navigator;
pub mod runner;

pub use app::App;
pub use command::NavCommand;
pub use config::Config;
pub use document::{BufferAccess, LineBuffer};
pub use error::{NavError, NavResult};
pub use navigator::{DeletePrompt, Outcome, OutcomeStatus, StructuralNavigator};
