pub mod artifact;
pub mod chat;
pub mod config;
pub mod credential;
pub mod error;
pub mod prompts;
pub mod readme;
pub mod repository;

pub use artifact::Artifact;
pub use chat::{ChatMessage, ChatReply, ChatRequest, ChatRole};
pub use config::{ApiConfig, InstallConfig, ScriptConfig};
pub use credential::Credential;
pub use error::AppError;
pub use readme::ReadmeDocument;
pub use repository::RepositoryReference;
