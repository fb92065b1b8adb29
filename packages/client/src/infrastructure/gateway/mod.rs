//! `ChatGateway` implementations.
//!
//! - `http`: reqwest-based client for `POST /api/chat`

pub mod http;

pub use http::HttpChatGateway;
