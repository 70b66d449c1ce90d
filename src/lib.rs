//! readme-install: turn a repository README into an executed install script
//! and simplified, translated HTML instructions.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


use std::path::PathBuf;

use adapters::{
    DialoguerPrompter, FilesystemReadmeLocator, GitCommandCloner, HttpChatClient, PresetPrompter,
    ShellScriptRunner, SystemLauncher,
};
use app::AppContext;
use app::commands::install::{self, InstallOptions};
use app::config::{ConfigOverrides, apply_overrides, load_config};
use domain::Credential;

pub use app::commands::install::InstallOutcome;
pub use domain::AppError;

/// Options for a full run, as collected by the CLI.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Repository URL; prompted for when `None`.
    pub url: Option<String>,
    /// Instruction language; prompted for when `None`.
    pub language: Option<String>,
    /// Optional TOML config file.
    pub config_path: Option<PathBuf>,
    /// Command-line overrides applied after the config file.
    pub overrides: ConfigOverrides,
    /// Open the HTML instructions when done.
    pub open_instructions: bool,
}

/// Run the whole workflow in the current directory.
///
/// The credential is checked before any prompt or network access.
pub fn run(options: RunOptions) -> Result<InstallOutcome, AppError> {
    let config = load_config(options.config_path.as_deref())?;
    let config = apply_overrides(config, options.overrides);

    let credential = Credential::from_env(&config.api.api_key_env)?;
    let chat = HttpChatClient::new(credential, &config.api)?;

    let prompter = PresetPrompter::new(options.url, options.language, DialoguerPrompter::new());
    let mut ctx = AppContext::new(
        chat,
        GitCommandCloner::new(),
        FilesystemReadmeLocator::new(),
        ShellScriptRunner::new(config.script.shell.clone()),
        SystemLauncher::new(),
        prompter,
    );

    let install_options = InstallOptions {
        model: config.api.model.clone(),
        work_dir: std::env::current_dir()?,
        open_instructions: options.open_instructions,
    };

    install::execute(&mut ctx, &install_options)
}
