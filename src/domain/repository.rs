//! Repository reference derived from user input.

use super::AppError;

/// A clone URL plus the directory name the clone is expected to land in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryReference {
    url: String,
    local_name: String,
}

impl RepositoryReference {
    /// Parse a repository URL as typed by the user.
    ///
    /// The local name is the final path segment with a trailing `.git`
    /// stripped. Both `https://host/owner/repo.git` and scp-style
    /// `git@host:owner/repo.git` forms are accepted.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let url = input.trim();
        if url.is_empty() {
            return Err(AppError::EmptyInput("repository URL".to_string()));
        }

        let last_segment = url.trim_end_matches('/').rsplit(['/', ':']).next().unwrap_or_default();
        let local_name = last_segment.strip_suffix(".git").unwrap_or(last_segment);

        if local_name.is_empty() || local_name == "." || local_name == ".." {
            return Err(AppError::config_error(format!(
                "Cannot derive a repository name from '{}'",
                url
            )));
        }

        Ok(Self { url: url.to_string(), local_name: local_name.to_string() })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Directory name under the working directory that the clone produces.
    pub fn local_name(&self) -> &str {
        &self.local_name
    }
}
