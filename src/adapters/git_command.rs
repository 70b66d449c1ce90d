use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::AppError;
use crate::ports::RepositoryCloner;

/// Clones through the `git` executable on `PATH`.
#[derive(Debug, Clone)]
pub struct GitCommandCloner {
    program: String,
}

impl Default for GitCommandCloner {
    fn default() -> Self {
        Self { program: "git".to_string() }
    }
}

impl GitCommandCloner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different executable, e.g. an absolute path to git.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }
}

impl RepositoryCloner for GitCommandCloner {
    fn clone_repository(&self, url: &str, dest_parent: &Path) -> Result<(), AppError> {
        tracing::info!(url, dir = %dest_parent.display(), "cloning repository");

        // Progress goes to the terminal; stderr is captured for the error message.
        let output = Command::new(&self.program)
            .args(["clone", url])
            .current_dir(dest_parent)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| AppError::Clone { url: url.to_string(), details: e.to_string() })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::Clone {
                url: url.to_string(),
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(())
    }
}
