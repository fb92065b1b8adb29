//! Operating mode selection.

use std::{fmt, str::FromStr};

use super::DomainError;

/// How the backend should answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Free conversation in the persona's voice
    #[default]
    Conversation,
    /// Answers grounded in reference passages
    Reference,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Conversation, Mode::Reference];

    /// Wire value of the mode
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Conversation => "conversation",
            Mode::Reference => "reference",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| DomainError::UnknownMode(name.to_string()))
    }
}
