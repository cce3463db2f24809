use std::path::{Path, PathBuf};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::command::NavCommand;

fn default_true() -> bool {
    true
}

/// Navigator behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigatorConfig {
    /// Ask before deleting a class or function block
    #[serde(default = "default_true")]
    pub confirm_deletions: bool,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            confirm_deletions: true,
        }
    }
}

/// Interpreter used by the run-code command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Program to launch (e.g., "python3")
    #[serde(default = "default_interpreter")]
    pub interpreter: String,

    /// Arguments placed before the script path
    #[serde(default)]
    pub args: Vec<String>,

    /// Suffix of the temporary script file
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

fn default_interpreter() -> String {
    "python3".to_string()
}

fn default_suffix() -> String {
    ".py".to_string()
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
            args: Vec::new(),
            suffix: default_suffix(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub navigator: NavigatorConfig,
    #[serde(default)]
    pub runner: RunnerConfig,
    #[serde(default)]
    pub keybindings: Keybindings,
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file(path: impl AsRef<Path>) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| miette::miette!("Failed to read config file: {}", e))?;

        Self::from_toml(&content)
    }

    /// Parse configuration, filling in bindings the file leaves out
    pub fn from_toml(content: &str) -> miette::Result<Self> {
        let mut config: Config = toml::from_str(content)
            .map_err(|e| miette::miette!("Failed to parse config file: {}", e))?;
        config.keybindings.fill_missing_defaults();
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> miette::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| miette::miette!("Failed to serialize config: {}", e))?;

        std::fs::write(path.as_ref(), content)
            .map_err(|e| miette::miette!("Failed to write config file: {}", e))?;

        Ok(())
    }

    /// Load configuration from default location or use defaults
    pub fn load_or_default() -> Self {
        let config_path = Self::default_config_path();

        if !config_path.exists() {
            return Self::default();
        }

        Self::load_from_file(&config_path).unwrap_or_else(|err| {
            warn!(path = %config_path.display(), error = %err, "ignoring unreadable config");
            Self::default()
        })
    }

    /// Get default config file path
    pub fn default_config_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("indent-nav").join("config.toml")
        } else {
            PathBuf::from(".indent-nav.toml")
        }
    }
}

/// One entry of the gesture table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Binding {
    pub command: NavCommand,
    pub key: KeyBinding,
}

/// Keybindings configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keybindings {
    #[serde(default)]
    pub bindings: Vec<Binding>,
}

impl Default for Keybindings {
    fn default() -> Self {
        let bind = |command, chord: &str| Binding {
            command,
            key: KeyBinding::parse(chord),
        };

        Self {
            bindings: vec![
                bind(NavCommand::MoveToNextFunction, "f2"),
                bind(NavCommand::MoveToPreviousFunction, "shift+f2"),
                bind(NavCommand::MoveToNextClass, "f7"),
                bind(NavCommand::MoveToPreviousClass, "shift+f7"),
                bind(NavCommand::SelectCurrentClass, "ctrl+shift+r"),
                bind(NavCommand::SelectCurrentFunction, "ctrl+r"),
                bind(NavCommand::DeleteCurrentClass, "ctrl+shift+delete"),
                bind(NavCommand::DeleteCurrentFunction, "ctrl+delete"),
                bind(NavCommand::RunCode, "ctrl+f5"),
                bind(NavCommand::MoveToNextIndentLevel, "alt+down"),
                bind(NavCommand::MoveToPreviousIndentLevel, "alt+up"),
                bind(NavCommand::MoveToNextIndentedLine, "ctrl+alt+down"),
                bind(NavCommand::MoveToPreviousIndentedLine, "ctrl+alt+up"),
                bind(NavCommand::SelectToNextIndentLevel, "shift+alt+down"),
                bind(NavCommand::SelectToPreviousIndentLevel, "shift+alt+up"),
                bind(NavCommand::MoveToFirstLineInIndentation, "alt+!"),
                bind(NavCommand::MoveToLastLineInIndentation, "alt+:"),
            ],
        }
    }
}

impl Keybindings {
    /// Command bound to a chord such as `"ctrl+shift+r"`
    pub fn command_for(&self, chord: &str) -> Option<NavCommand> {
        let key = KeyBinding::parse(chord);
        self.bindings
            .iter()
            .find(|binding| binding.key.matches(&key))
            .map(|binding| binding.command)
    }

    pub fn binding_for(&self, command: NavCommand) -> Option<&KeyBinding> {
        self.bindings
            .iter()
            .find(|binding| binding.command == command)
            .map(|binding| &binding.key)
    }

    /// Add the default binding of every command the table leaves out
    pub fn fill_missing_defaults(&mut self) {
        let missing = Self::default()
            .bindings
            .into_iter()
            .filter(|default| self.binding_for(default.command).is_none())
            .collect_vec();
        self.bindings.extend(missing);
    }
}

/// Represents a key binding with modifiers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    pub code: String,
    pub modifiers: Vec<String>,
}

impl KeyBinding {
    /// Parse a chord such as `"Ctrl+Shift+R"`; the last segment is the key
    pub fn parse(chord: &str) -> Self {
        let chord = chord.trim();
        // A trailing "+" is the plus key itself
        let (modifiers, code) = match chord.strip_suffix("++") {
            Some(rest) => (rest, "+"),
            None => chord.rsplit_once('+').unwrap_or(("", chord)),
        };

        Self {
            code: code.trim().to_lowercase(),
            modifiers: modifiers
                .split('+')
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_lowercase)
                .collect(),
        }
    }

    fn canonical_modifier(modifier: &str) -> &str {
        match modifier {
            "control" => "ctrl",
            "option" => "alt",
            other => other,
        }
    }

    fn normalized(&self) -> (String, Vec<String>) {
        let modifiers = self
            .modifiers
            .iter()
            .map(|m| Self::canonical_modifier(&m.to_lowercase()).to_string())
            .sorted()
            .dedup()
            .collect_vec();
        (self.code.to_lowercase(), modifiers)
    }

    /// Same key and modifiers, ignoring case and modifier order
    pub fn matches(&self, other: &KeyBinding) -> bool {
        self.normalized() == other.normalized()
    }

    /// Get a human-readable representation of the keybinding
    pub fn display(&self) -> String {
        let mut parts = Vec::new();

        for modifier in &self.modifiers {
            match modifier.to_lowercase().as_str() {
                "ctrl" | "control" => parts.push("Ctrl".to_string()),
                "shift" => parts.push("Shift".to_string()),
                "alt" | "option" => parts.push("Alt".to_string()),
                _ => parts.push(modifier.clone()),
            }
        }

        parts.push(self.code.to_uppercase());
        parts.join("+")
    }
}
