use std::path::Path;
use std::process::{Command, Stdio};

use crate::ports::FileLauncher;

/// Opens files with the platform's default handler.
#[derive(Debug, Clone)]
pub struct SystemLauncher {
    openers: Vec<Vec<String>>,
}

impl Default for SystemLauncher {
    fn default() -> Self {
        Self { openers: platform_openers() }
    }
}

impl SystemLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try the given command lines in order; the path is appended to each.
    pub fn with_openers(openers: Vec<Vec<String>>) -> Self {
        Self { openers }
    }
}

#[cfg(target_os = "macos")]
fn platform_openers() -> Vec<Vec<String>> {
    vec![vec!["open".to_string()]]
}

#[cfg(target_os = "windows")]
fn platform_openers() -> Vec<Vec<String>> {
    vec![vec!["cmd".to_string(), "/C".to_string(), "start".to_string(), String::new()]]
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_openers() -> Vec<Vec<String>> {
    vec![vec!["xdg-open".to_string()], vec!["gio".to_string(), "open".to_string()]]
}

impl FileLauncher for SystemLauncher {
    fn open(&self, path: &Path) -> bool {
        for opener in &self.openers {
            let Some((program, args)) = opener.split_first() else {
                continue;
            };
            let status = Command::new(program)
                .args(args)
                .arg(path)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status();
            match status {
                Ok(status) if status.success() => return true,
                Ok(status) => tracing::debug!(program, ?status, "opener failed"),
                Err(err) => tracing::debug!(program, %err, "opener unavailable"),
            }
        }
        false
    }
}
