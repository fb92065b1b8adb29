//! Session identifier issued by the Chat API.

use std::fmt;

use super::DomainError;

/// Opaque, non-empty token that ties requests to one server-side session
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(value: String) -> Result<Self, DomainError> {
        if value.is_empty() {
            return Err(DomainError::EmptySessionId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_id() {
        // テスト項目: 空でない文字列からセッション ID を作成できる
        // given (前提条件):
        let value = "abc".to_string();

        // when (操作):
        let result = SessionId::new(value);

        // then (期待する結果):
        assert_eq!(result.unwrap().as_str(), "abc");
    }

    #[test]
    fn test_empty_session_id_is_rejected() {
        // テスト項目: 空文字列のセッション ID はエラーになる
        // given (前提条件):
        let value = String::new();

        // when (操作):
        let result = SessionId::new(value);

        // then (期待する結果):
        assert_eq!(result, Err(DomainError::EmptySessionId));
    }
}
