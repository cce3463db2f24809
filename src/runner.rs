use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use miette::Result;
use tracing::{info, warn};

use crate::config::RunnerConfig;
use crate::document::BufferAccess;

/// Where the code handed to the interpreter came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptSource {
    Selection,
    WholeDocument,
}

/// A script written to disk, ready to run
#[derive(Debug, Clone)]
pub struct PreparedScript {
    pub path: PathBuf,
    pub source: ScriptSource,
}

/// Runs buffer text through an external interpreter
#[derive(Debug, Clone)]
pub struct CodeRunner {
    config: RunnerConfig,
}

impl CodeRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Write the selection, or the whole document when nothing is selected,
    /// to a temporary file that outlives this process
    pub fn prepare<B>(&self, buffer: &B) -> Result<PreparedScript>
    where
        B: BufferAccess + ?Sized,
    {
        let (code, source) = match buffer.selected_text() {
            Some(text) if !text.is_empty() => (text, ScriptSource::Selection),
            _ => (buffer.whole_document_text(), ScriptSource::WholeDocument),
        };

        let mut file = tempfile::Builder::new()
            .prefix("indent-nav-")
            .suffix(&self.config.suffix)
            .tempfile()
            .map_err(|e| miette::miette!("Failed to create script file: {}", e))?;

        file.write_all(code.as_bytes())
            .map_err(|e| miette::miette!("Failed to write script file: {}", e))?;

        let (_, path) = file
            .keep()
            .map_err(|e| miette::miette!("Failed to keep script file: {}", e))?;

        Ok(PreparedScript { path, source })
    }

    /// Prepare the script and run the interpreter on it until it exits
    pub fn run<B>(&self, buffer: &B) -> Result<PreparedScript>
    where
        B: BufferAccess + ?Sized,
    {
        let script = self.prepare(buffer)?;
        self.execute(&script.path)?;
        Ok(script)
    }

    fn execute(&self, path: &Path) -> Result<()> {
        info!(
            interpreter = %self.config.interpreter,
            script = %path.display(),
            "running code"
        );

        let status = Command::new(&self.config.interpreter)
            .args(&self.config.args)
            .arg(path)
            .status()
            .map_err(|e| {
                miette::miette!(
                    "Failed to start interpreter '{}': {}",
                    self.config.interpreter,
                    e
                )
            })?;

        if !status.success() {
            warn!(%status, script = %path.display(), "interpreter exited with failure");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{CaretPlacement, LineBuffer, Position};

    fn runner() -> CodeRunner {
        CodeRunner::new(RunnerConfig::default())
    }

    #[test]
    fn test_prepare_whole_document() {
        let buffer = LineBuffer::from_string("def f():\n    return 1\n\nprint(f())\n");
        let script = runner().prepare(&buffer).unwrap();

        assert_eq!(script.source, ScriptSource::WholeDocument);
        assert_eq!(script.path.extension().unwrap(), "py");
        let written = std::fs::read_to_string(&script.path).unwrap();
        assert_eq!(written, "def f():\n    return 1\n\nprint(f())\n");

        std::fs::remove_file(&script.path).unwrap();
    }

    #[test]
    fn test_prepare_selection() {
        let mut buffer = LineBuffer::from_lines(["x = 1", "y = 2", "print(x + y)"]);
        buffer
            .set_selection(Position::new(1), Position::new(2), CaretPlacement::End)
            .unwrap();

        let script = runner().prepare(&buffer).unwrap();
        assert_eq!(script.source, ScriptSource::Selection);
        let written = std::fs::read_to_string(&script.path).unwrap();
        assert_eq!(written, "y = 2\nprint(x + y)");

        std::fs::remove_file(&script.path).unwrap();
    }

    #[test]
    fn test_prepare_uses_configured_suffix() {
        let runner = CodeRunner::new(RunnerConfig {
            suffix: ".rb".to_string(),
            ..RunnerConfig::default()
        });
        let script = runner.prepare(&LineBuffer::from_lines(["puts 1"])).unwrap();
        assert_eq!(script.path.extension().unwrap(), "rb");

        std::fs::remove_file(&script.path).unwrap();
    }
}
