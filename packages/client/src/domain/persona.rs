//! Persona selection.

use std::{fmt, str::FromStr};

use super::DomainError;

/// Identity the backend answers as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Persona {
    #[default]
    Augustine,
    Freud,
}

impl Persona {
    pub const ALL: [Persona; 2] = [Persona::Augustine, Persona::Freud];

    /// Name sent to the Chat API and shown in the transcript
    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::Augustine => "Augustine",
            Persona::Freud => "Freud",
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Persona {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Persona::ALL
            .into_iter()
            .find(|persona| persona.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| DomainError::UnknownPersona(name.to_string()))
    }
}
