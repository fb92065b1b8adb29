//! Parsing of REPL input lines.

use crate::domain::{Mode, Persona};

/// Action requested by one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Plain text to send to the Chat API
    Send(String),
    /// `/persona <name>`
    ChangePersona(Persona),
    /// `/mode <name>`
    ChangeMode(Mode),
    /// `/memory`
    TestMemory,
    /// `/session`
    ShowSession,
    /// `/help`
    Help,
    /// `/quit` or `/exit`
    Quit,
    /// Malformed command, with a hint for the user
    Invalid(String),
}

/// Names recognised after a leading `/`
const COMMAND_NAMES: [&str; 7] = [
    "persona", "mode", "memory", "session", "help", "quit", "exit",
];

/// Parse one line of user input.
///
/// Only a known command name after a leading `/` makes a command.
/// Anything else, including text such as `/usr/bin is a path`, is sent as is.
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    let Some(rest) = trimmed.strip_prefix('/') else {
        return Command::Send(line.to_string());
    };

    let mut parts = rest.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or_default().to_ascii_lowercase();
    let argument = parts.next().map(str::trim).filter(|arg| !arg.is_empty());

    if !COMMAND_NAMES.contains(&name.as_str()) {
        return Command::Send(line.to_string());
    }

    match (name.as_str(), argument) {
        ("persona", Some(arg)) => match arg.parse() {
            Ok(persona) => Command::ChangePersona(persona),
            Err(e) => Command::Invalid(e.to_string()),
        },
        ("persona", None) => Command::Invalid("Usage: /persona <augustine|freud>".to_string()),
        ("mode", Some(arg)) => match arg.parse() {
            Ok(mode) => Command::ChangeMode(mode),
            Err(e) => Command::Invalid(e.to_string()),
        },
        ("mode", None) => Command::Invalid("Usage: /mode <conversation|reference>".to_string()),
        ("memory", None) => Command::TestMemory,
        ("session", None) => Command::ShowSession,
        ("help", None) => Command::Help,
        ("quit" | "exit", None) => Command::Quit,
        (_, _) => Command::Invalid(format!("/{} takes no arguments", name)),
    }
}
