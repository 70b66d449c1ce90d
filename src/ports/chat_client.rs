//! Chat-completion API port definition.

use crate::domain::{AppError, ChatReply, ChatRequest};

/// Port for chat-completion calls.
pub trait ChatClient {
    /// Send one request and return the raw reply body.
    ///
    /// Only transport failures are errors; an unusable body is returned as-is
    /// and judged by `ChatReply::into_completion`.
    fn complete(&self, request: &ChatRequest) -> Result<ChatReply, AppError>;
}
