//! ChatGateway trait 定義
//!
//! The use case layer sends requests through this trait and never sees the
//! HTTP client. The infrastructure layer provides the implementation.

use async_trait::async_trait;

use super::{ChatApiError, Mode, Persona, SessionId};

/// One request to the Chat API
///
/// Persona and mode are captured when the request is built, so later
/// selection changes never affect a request already in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub question: String,
    pub mode: Mode,
    pub persona: Persona,
    pub session_id: Option<SessionId>,
}

/// Successful Chat API answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub response: String,
    pub session_id: Option<SessionId>,
}

/// Chat API gateway
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Send one question and wait for the reply
    async fn chat(&self, request: ChatRequest) -> Result<ChatReply, ChatApiError>;
}
