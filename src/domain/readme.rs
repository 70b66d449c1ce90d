use std::fs;
use std::path::{Path, PathBuf};

use super::AppError;

/// Exact file names tried, in priority order, before the fallback search.
pub const README_CANDIDATES: [&str; 2] = ["README.md", "README"];

/// Lowercase basename prefix used by the recursive fallback search.
pub const README_PREFIX: &str = "readme";

/// Full text of the discovered README.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeDocument {
    path: PathBuf,
    content: String,
}

impl ReadmeDocument {
    /// Read the whole file into memory. Invalid UTF-8 sequences are replaced.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let bytes = fs::read(path)?;
        let content = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        };
        Ok(Self { path: path.to_path_buf(), content })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Whether a file name qualifies for the case-insensitive fallback search.
pub fn is_readme_name(file_name: &str) -> bool {
    file_name.to_lowercase().starts_with(README_PREFIX)
}
