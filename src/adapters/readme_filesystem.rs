//! `ReadmeLocator` backed by the local filesystem.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::AppError;
use crate::domain::readme::{README_CANDIDATES, is_readme_name};
use crate::ports::ReadmeLocator;

/// Exact names first, then a recursive case-insensitive `readme*` search.
///
/// The fallback takes the first hit in directory-walk order, which depends on
/// the platform and is not sorted.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemReadmeLocator;

impl FilesystemReadmeLocator {
    pub fn new() -> Self {
        Self
    }
}

impl ReadmeLocator for FilesystemReadmeLocator {
    fn locate(&self, repo_dir: &Path) -> Result<PathBuf, AppError> {
        for name in README_CANDIDATES {
            let candidate = repo_dir.join(name);
            if candidate.is_file() {
                tracing::debug!(path = %candidate.display(), "found README by exact name");
                return Ok(candidate);
            }
        }

        let fallback = WalkDir::new(repo_dir)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .find(|entry| entry.file_name().to_str().is_some_and(is_readme_name))
            .map(|entry| entry.into_path());

        match fallback {
            Some(path) => {
                tracing::debug!(path = %path.display(), "found README by fallback search");
                Ok(path)
            }
            None => Err(AppError::ReadmeNotFound(repo_dir.display().to_string())),
        }
    }
}
