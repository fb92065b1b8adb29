//! Conversion logic between DTOs and domain values.

use crate::domain::{ChatReply, ChatRequest, SessionId};
use crate::infrastructure::dto::http as dto;

// ========================================
// DTO → Domain
// ========================================

impl From<dto::ChatResponseDto> for ChatReply {
    fn from(dto: dto::ChatResponseDto) -> Self {
        Self {
            response: dto.response,
            // An empty session id is treated as "not assigned"
            session_id: dto.session_id.and_then(|id| SessionId::new(id).ok()),
        }
    }
}

// ========================================
// Domain → DTO
// ========================================

impl From<&ChatRequest> for dto::ChatRequestDto {
    fn from(model: &ChatRequest) -> Self {
        Self {
            question: model.question.clone(),
            mode: model.mode.as_str().to_string(),
            persona: model.persona.as_str().to_string(),
            session_id: model.session_id.as_ref().map(|id| id.as_str().to_string()),
        }
    }
}
