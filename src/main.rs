use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use miette::Result;

use indent_nav::{App, BufferAccess, Config, DeletePrompt, NavCommand, Outcome, logging};

/// Indentation-based structural navigation for Python-like source files
#[derive(Parser)]
#[command(name = "indent-nav")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a navigation command on a file
    Nav {
        #[command(flatten)]
        target: Target,
        /// Command to run
        #[arg(value_enum)]
        action: NavCommand,
    },
    /// Run the command bound to a key chord (e.g. "ctrl+shift+r")
    Press {
        #[command(flatten)]
        target: Target,
        /// Key chord to resolve through the binding table
        chord: String,
    },
    /// List commands and their key bindings
    Keys,
    /// Initialize default configuration file
    InitConfig,
}

#[derive(Args)]
struct Target {
    /// File to open
    file: PathBuf,

    /// Line the caret starts on (1-based)
    #[arg(short, long, default_value_t = 1)]
    line: usize,

    /// Delete without asking for confirmation
    #[arg(short, long)]
    yes: bool,

    /// Write the document back when the command changed it
    #[arg(short, long)]
    write: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    logging::init(cli.verbose)
        .map_err(|e| miette::miette!("Failed to initialize logging: {}", e))?;

    match cli.command {
        Commands::InitConfig => {
            init_config(cli.config.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Keys => {
            list_keys(&load_config(cli.config.as_deref())?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Nav { target, action } => {
            let config = load_config(cli.config.as_deref())?;
            run(&target, config, |app, confirm| app.execute(action, confirm))
        }
        Commands::Press { target, chord } => {
            let config = load_config(cli.config.as_deref())?;
            run(&target, config, |app, confirm| app.press(&chord, confirm))
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path),
        None => Ok(Config::load_or_default()),
    }
}

type Confirm = fn(&DeletePrompt<'_>) -> bool;

/// Exits with failure when the command found nothing to act on or was cancelled
fn run<F>(target: &Target, config: Config, command: F) -> Result<ExitCode>
where
    F: FnOnce(&mut App, Confirm) -> Result<Outcome>,
{
    let mut app = App::from_file(&target.file, config)?;
    if let Some(buffer) = app.buffer_mut() {
        buffer.set_cursor_line(target.line.saturating_sub(1));
    }

    let confirm: Confirm = if target.yes { |_| true } else { ask };
    let outcome = command(&mut app, confirm)?;

    println!("{}", outcome.message);
    if let Some(caret) = outcome.new_caret {
        println!("caret: {caret}");
    }
    if let Some(buffer) = app.buffer()
        && let Some(selection) = buffer.selection()
    {
        println!(
            "selection: lines {}-{}",
            selection.start().line() + 1,
            selection.end().line() + 1
        );
        if let Some(text) = buffer.selected_text() {
            println!("{text}");
        }
    }

    let modified = app.buffer().is_some_and(|buffer| buffer.is_modified());
    if target.write && modified {
        app.save()?;
        println!("saved {}", target.file.display());
    }

    if outcome.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn ask(prompt: &DeletePrompt<'_>) -> bool {
    eprintln!("{}", prompt.title());
    eprint!("{} [y/N] ", prompt.question());
    if io::stderr().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn list_keys(config: &Config) {
    for command in NavCommand::value_variants() {
        let key = config
            .keybindings
            .binding_for(*command)
            .map(|binding| binding.display())
            .unwrap_or_else(|| "-".to_string());
        let note = if command.is_destructive() {
            " (asks for confirmation)"
        } else {
            ""
        };
        println!(
            "{:<36} {:<18} {}{note}",
            command.name(),
            key,
            command.description()
        );
    }
}

fn init_config(path: Option<&Path>) -> Result<()> {
    let config = Config::default();
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::default_config_path);

    // Create config directory if it doesn't exist
    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| miette::miette!("Failed to create config directory: {}", e))?;
    }

    if config_path.exists() {
        eprintln!("Config file already exists at: {}", config_path.display());
        eprintln!("Remove it first or edit it manually.");
        return Ok(());
    }

    config.save_to_file(&config_path)?;
    println!(
        "Created default config file at: {}\n\n\
         You can edit this file to customize your keybindings.\n\
         Run `indent-nav keys` to list them.",
        config_path.display()
    );

    Ok(())
}
