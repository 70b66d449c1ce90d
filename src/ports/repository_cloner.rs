use std::path::Path;

use crate::domain::AppError;

/// Port for the version-control client.
pub trait RepositoryCloner {
    /// Clone `url` into `dest_parent`, letting the client choose the directory name.
    fn clone_repository(&self, url: &str, dest_parent: &Path) -> Result<(), AppError>;
}
