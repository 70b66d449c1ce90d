//! Writes generated artifacts to disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, Artifact};

/// Write `content` verbatim to the artifact's fixed name under `dir`.
///
/// Existing files are truncated. The install script is made executable.
pub fn write_artifact(dir: &Path, artifact: Artifact, content: &str) -> Result<PathBuf, AppError> {
    let path = artifact.path_in(dir);
    fs::write(&path, content)?;
    if artifact.executable() {
        set_executable(&path)?;
    }
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote artifact");
    Ok(path)
}

fn set_executable(path: &Path) -> Result<(), AppError> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms)?;
    }
    #[cfg(not(unix))]
    let _ = path;
    Ok(())
}
