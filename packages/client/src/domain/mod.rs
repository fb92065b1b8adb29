//! Domain layer
//!
//! Conversation state and the value objects it is made of, plus the
//! `ChatGateway` trait the use case layer depends on. The concrete gateway
//! lives in the infrastructure layer (dependency inversion).

mod error;
mod gateway;
mod message;
mod mode;
mod persona;
mod session;
mod state;

pub use error::{ChatApiError, DomainError};
pub use gateway::{ChatGateway, ChatReply, ChatRequest};
pub use message::{Message, Role, Timestamp};
pub use mode::Mode;
pub use persona::Persona;
pub use session::SessionId;
pub use state::{ConversationState, FETCH_ERROR_MESSAGE, MEMORY_TEST_QUESTION, RejectReason};

#[cfg(test)]
pub use gateway::MockChatGateway;
