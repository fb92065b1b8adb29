//! Conversation state (client-side aggregate).
//!
//! ## 不変条件
//!
//! - `messages` is append-only; insertion order is display order
//! - at most one exchange is pending at a time
//! - `session_id` is assigned at most once per client lifetime

use super::{ChatReply, ChatRequest, Message, Mode, Persona, SessionId, Timestamp};

/// Fixed question sent by the memory test
pub const MEMORY_TEST_QUESTION: &str = "What did we discuss in our previous messages?";

/// Error text shown when an exchange fails
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching response";

/// Minimum history length before the memory test is allowed
const MEMORY_TEST_MIN_MESSAGES: usize = 2;

/// Why a submission was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Text was empty after trimming
    EmptyMessage,
    /// Another exchange is still waiting for its reply
    RequestPending,
    /// Memory test needs at least two messages of history
    NotEnoughHistory,
}

/// Everything the client knows about the current conversation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConversationState {
    messages: Vec<Message>,
    session_id: Option<SessionId>,
    persona: Persona,
    mode: Mode,
    pending: bool,
    last_error: Option<String>,
}

impl ConversationState {
    /// Create an empty conversation with the initial selections
    pub fn new(persona: Persona, mode: Mode) -> Self {
        Self {
            persona,
            mode,
            ..Self::default()
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    pub fn persona(&self) -> Persona {
        self.persona
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Whether the memory test would currently be accepted
    pub fn can_test_memory(&self) -> bool {
        !self.pending && self.messages.len() >= MEMORY_TEST_MIN_MESSAGES
    }

    /// Start an exchange for user-entered text.
    ///
    /// On success the trimmed text is appended as a user message, the
    /// pending flag is set and the request to send is returned. On
    /// rejection the state is left untouched.
    pub fn begin_exchange(
        &mut self,
        text: &str,
        now: Timestamp,
    ) -> Result<ChatRequest, RejectReason> {
        let question = text.trim();
        if question.is_empty() {
            return Err(RejectReason::EmptyMessage);
        }
        if self.pending {
            return Err(RejectReason::RequestPending);
        }

        self.last_error = None;
        self.messages.push(Message::user(question, now));
        self.pending = true;

        Ok(ChatRequest {
            question: question.to_string(),
            mode: self.mode,
            persona: self.persona,
            session_id: self.session_id.clone(),
        })
    }

    /// Start an exchange asking the backend to recall the conversation
    pub fn begin_memory_test(&mut self, now: Timestamp) -> Result<ChatRequest, RejectReason> {
        if self.pending {
            return Err(RejectReason::RequestPending);
        }
        if self.messages.len() < MEMORY_TEST_MIN_MESSAGES {
            return Err(RejectReason::NotEnoughHistory);
        }
        self.begin_exchange(MEMORY_TEST_QUESTION, now)
    }

    /// Apply a successful reply
    pub fn record_reply(&mut self, reply: ChatReply, now: Timestamp) {
        if self.session_id.is_none()
            && let Some(session_id) = reply.session_id
        {
            self.session_id = Some(session_id);
        }
        self.messages.push(Message::assistant(reply.response, now));
        self.last_error = None;
    }

    /// Apply a failed exchange; history is left as is
    pub fn record_failure(&mut self) {
        self.last_error = Some(FETCH_ERROR_MESSAGE.to_string());
    }

    /// Clear the pending flag. Returns whether it was set.
    pub fn release_pending(&mut self) -> bool {
        std::mem::replace(&mut self.pending, false)
    }

    /// Returns whether the persona changed
    pub fn set_persona(&mut self, persona: Persona) -> bool {
        std::mem::replace(&mut self.persona, persona) != persona
    }

    /// Returns whether the mode changed
    pub fn set_mode(&mut self, mode: Mode) -> bool {
        std::mem::replace(&mut self.mode, mode) != mode
    }
}
