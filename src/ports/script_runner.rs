use std::path::Path;
use std::process::ExitStatus;

use crate::domain::AppError;

/// Port for executing the generated install script.
pub trait ScriptRunner {
    /// Run the script synchronously with inherited stdio and return its status.
    ///
    /// Errors only when the process cannot be spawned.
    fn run(&self, script: &Path, cwd: &Path) -> Result<ExitStatus, AppError>;
}
