//! Data Transfer Objects (DTOs) for the Chat API.
//!
//! - `http`: request and response bodies of `POST /api/chat`
//! - `conversion`: mapping between DTOs and domain values

pub mod conversion;
pub mod http;
