use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for locating a repository's README.
pub trait ReadmeLocator {
    /// Return the README path inside `repo_dir`, or `ReadmeNotFound`.
    fn locate(&self, repo_dir: &Path) -> Result<PathBuf, AppError>;
}
