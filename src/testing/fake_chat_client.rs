use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, ChatReply, ChatRequest};
use crate::ports::ChatClient;

/// Replays queued reply bodies and records every request.
#[derive(Clone, Default)]
pub struct FakeChatClient {
    pub requests: Arc<Mutex<Vec<ChatRequest>>>,
    replies: Arc<Mutex<VecDeque<Result<String, String>>>>,
}

impl FakeChatClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply whose first choice carries `content`.
    pub fn with_completion(self, content: &str) -> Self {
        let body = serde_json::json!({
            "choices": [{ "index": 0, "message": { "role": "assistant", "content": content } }]
        });
        self.with_raw_reply(&body.to_string())
    }

    /// Queue a raw reply body.
    pub fn with_raw_reply(self, body: &str) -> Self {
        self.replies.lock().unwrap().push_back(Ok(body.to_string()));
        self
    }

    /// Queue a transport failure.
    pub fn with_transport_error(self, message: &str) -> Self {
        self.replies.lock().unwrap().push_back(Err(message.to_string()));
        self
    }

    pub fn sent_requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl ChatClient for FakeChatClient {
    fn complete(&self, request: &ChatRequest) -> Result<ChatReply, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(body)) => Ok(ChatReply::new(body)),
            Some(Err(message)) => Err(AppError::Transport(message)),
            None => panic!("FakeChatClient: no reply queued for request"),
        }
    }
}
