pub mod artifact_writer;
pub mod chat_client_http;
pub mod git_command;
pub mod prompter_dialoguer;
pub mod readme_filesystem;
pub mod script_shell;
pub mod system_launcher;

pub use artifact_writer::write_artifact;
pub use chat_client_http::HttpChatClient;
pub use git_command::GitCommandCloner;
pub use prompter_dialoguer::{DialoguerPrompter, PresetPrompter};
pub use readme_filesystem::FilesystemReadmeLocator;
pub use script_shell::ShellScriptRunner;
pub use system_launcher::SystemLauncher;
