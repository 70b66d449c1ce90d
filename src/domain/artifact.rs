use std::path::{Path, PathBuf};

/// Generated install script, written to the working directory.
pub const INSTALL_SCRIPT_FILE: &str = "install_script.sh";

/// Generated HTML instructions, written to the working directory.
pub const INSTRUCTIONS_FILE: &str = "simplified_instructions.html";

/// Files produced by a run. Each is overwritten wholesale on every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    InstallScript,
    Instructions,
}

impl Artifact {
    pub fn file_name(&self) -> &'static str {
        match self {
            Artifact::InstallScript => INSTALL_SCRIPT_FILE,
            Artifact::Instructions => INSTRUCTIONS_FILE,
        }
    }

    pub fn executable(&self) -> bool {
        matches!(self, Artifact::InstallScript)
    }

    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}
