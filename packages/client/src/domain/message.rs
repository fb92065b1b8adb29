//! Chat message value objects.

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// Unix timestamp in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// One entry of the conversation history
///
/// Messages are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    role: Role,
    text: String,
    sent_at: Timestamp,
}

impl Message {
    pub fn user(text: impl Into<String>, sent_at: Timestamp) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            sent_at,
        }
    }

    pub fn assistant(text: impl Into<String>, sent_at: Timestamp) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
            sent_at,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sent_at(&self) -> Timestamp {
        self.sent_at
    }
}
