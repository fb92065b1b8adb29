//! UseCase layer
//!
//! `ChatClient` owns the conversation state and drives exchanges with the
//! Chat API through the `ChatGateway` trait.

mod chat_client;

pub use chat_client::{ChatClient, ExchangeOutcome, PendingExchange};
