//! Chat-completion payload models.
//!
//! Request bodies are always produced by `serde_json`, so README and language
//! text can contain quotes, backslashes, control characters or any Unicode
//! without breaking the JSON document.

use serde::{Deserialize, Serialize};

use super::AppError;
use super::prompts;

/// Text the completion is compared against when the model emits a null marker.
const NULL_SENTINEL: &str = "null";

/// Role tag of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

/// One role-tagged message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: ChatRole::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: ChatRole::User, content: content.into() }
    }
}

/// Body of a chat-completion POST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    /// Request asking for a self-contained installation script.
    pub fn install_script(model: &str, readme: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                ChatMessage::system(prompts::INSTALL_SCRIPT_SYSTEM),
                ChatMessage::user(prompts::install_script_user_message(readme)),
            ],
        }
    }

    /// Request asking for simplified HTML instructions in `language`.
    pub fn simplified_instructions(model: &str, readme: &str, language: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                ChatMessage::system(prompts::INSTRUCTIONS_SYSTEM),
                ChatMessage::user(prompts::instructions_user_message(readme, language)),
            ],
        }
    }

    /// Content of the first user-role message.
    pub fn user_content(&self) -> Option<&str> {
        self.messages.iter().find(|m| m.role == ChatRole::User).map(|m| m.content.as_str())
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        serde_json::to_string(self).map_err(|e| AppError::Serialization {
            what: "chat request".to_string(),
            details: e.to_string(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ReplyMessage>,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Raw reply body of a chat-completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    raw: String,
}

impl ChatReply {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// `choices[0].message.content`, if the body has it.
    pub fn content(&self) -> Option<String> {
        let response: ChatResponse = serde_json::from_str(&self.raw).ok()?;
        response.choices.into_iter().next()?.message?.content
    }

    /// Extract the completion text, returned verbatim.
    ///
    /// A missing field, JSON `null`, empty text or text equal to `null` yields
    /// `EmptyCompletion` carrying the raw body.
    pub fn into_completion(self) -> Result<String, AppError> {
        match self.content() {
            Some(text) if !text.is_empty() && text != NULL_SENTINEL => Ok(text),
            _ => Err(AppError::EmptyCompletion { raw: self.raw }),
        }
    }
}
