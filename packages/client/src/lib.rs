//! Colloquy chat client library.
//!
//! A terminal client for a persona chat API: it keeps the conversation
//! state, forwards each message to `POST /api/chat` and prints the replies.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// configuration
pub mod config;
