//! Shared testing harness for `readme-install` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::git_repository;

pub(crate) const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub(crate) const TEST_API_KEY: &str = "sk-test-key";

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Directory the CLI runs in; clones and artifacts land here.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for the compiled binary with a valid API key.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = self.cli_without_key();
        cmd.env(API_KEY_ENV, TEST_API_KEY);
        cmd
    }

    /// Build a command for the compiled binary with no API key in the environment.
    pub(crate) fn cli_without_key(&self) -> Command {
        let mut cmd = Command::cargo_bin("readme-install").expect("Failed to locate binary");
        cmd.current_dir(self.work_dir())
            .env("HOME", self.home())
            .env_remove(API_KEY_ENV)
            .env_remove("RUST_LOG");
        cmd
    }

    /// Create a bare git repository outside the work dir and return its clone URL.
    pub(crate) fn remote_repository(&self, name: &str, files: &[(&str, &str)]) -> String {
        let path = git_repository::create_remote(self.root.path(), name, files);
        path.to_str().expect("utf-8 path").to_string()
    }

    /// Write a file at the root of the temp dir and return its path.
    pub(crate) fn write_root_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, content).expect("write root file");
        path
    }

    pub(crate) fn install_script_path(&self) -> PathBuf {
        self.work_dir.join("install_script.sh")
    }

    pub(crate) fn instructions_path(&self) -> PathBuf {
        self.work_dir.join("simplified_instructions.html")
    }

    /// Names of the entries in the work dir, sorted.
    pub(crate) fn work_dir_entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.work_dir)
            .expect("read work dir")
            .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
