//! Domain error types.

use thiserror::Error;

/// Errors raised while building domain values from user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Persona name is not one of the supported personas
    #[error("Unknown persona '{0}' (expected one of: augustine, freud)")]
    UnknownPersona(String),

    /// Mode name is not one of the supported modes
    #[error("Unknown mode '{0}' (expected one of: conversation, reference)")]
    UnknownMode(String),

    /// Session id must not be empty
    #[error("Session id must not be empty")]
    EmptySessionId,
}

/// Chat API call failures
///
/// Callers treat every variant the same way: the exchange failed.
#[derive(Debug, Error)]
pub enum ChatApiError {
    /// Network error, timeout, or the request could not be sent
    #[error("Transport error: {0}")]
    Transport(String),

    /// The API answered with a non-success status
    #[error("Chat API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON
    #[error("Failed to decode chat response: {0}")]
    Decode(String),
}
