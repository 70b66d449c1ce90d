use std::path::Path;

/// Port for the host's default file opener.
pub trait FileLauncher {
    /// Open `path` with the default handler. Returns false if no opener worked.
    fn open(&self, path: &Path) -> bool;
}
