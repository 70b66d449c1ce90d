use std::path::Path;
use std::process::{Command, ExitStatus};

use crate::domain::AppError;
use crate::ports::ScriptRunner;

/// Runs the install script through a shell, attached to the current terminal.
///
/// No timeout and no sandbox: the script runs with the caller's privileges.
#[derive(Debug, Clone)]
pub struct ShellScriptRunner {
    shell: String,
}

impl ShellScriptRunner {
    pub fn new(shell: impl Into<String>) -> Self {
        Self { shell: shell.into() }
    }
}

impl ScriptRunner for ShellScriptRunner {
    fn run(&self, script: &Path, cwd: &Path) -> Result<ExitStatus, AppError> {
        tracing::info!(shell = %self.shell, script = %script.display(), "running install script");
        Command::new(&self.shell).arg(script).current_dir(cwd).status().map_err(|e| {
            AppError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to run {} with {}: {}", script.display(), self.shell, e),
            ))
        })
    }
}
