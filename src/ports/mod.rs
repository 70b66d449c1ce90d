mod chat_client;
mod file_launcher;
mod input_prompter;
mod readme_locator;
mod repository_cloner;
mod script_runner;

pub use chat_client::ChatClient;
pub use file_launcher::FileLauncher;
pub use input_prompter::InputPrompter;
pub use readme_locator::ReadmeLocator;
pub use repository_cloner::RepositoryCloner;
pub use script_runner::ScriptRunner;
