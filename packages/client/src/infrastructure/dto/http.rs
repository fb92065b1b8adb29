//! HTTP DTOs of the Chat API.

use serde::{Deserialize, Serialize};

/// Request body of `POST /api/chat`
///
/// `session_id` is always present on the wire, as `null` before the
/// backend has assigned one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequestDto {
    pub question: String,
    pub mode: String,
    pub persona: String,
    pub session_id: Option<String>,
}

/// Response body of `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponseDto {
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}
