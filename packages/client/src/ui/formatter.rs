//! Message formatting utilities for client display.

use colloquy_shared::time::timestamp_to_local_time_of_day;

use crate::domain::{Message, Mode, Persona, RejectReason, Role, SessionId};

const RULE: &str = "============================================================";

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format the banner shown when the client starts
    ///
    /// # Arguments
    ///
    /// * `persona` - The initial persona
    /// * `mode` - The initial mode
    /// * `endpoint` - The chat endpoint URL
    pub fn format_banner(persona: Persona, mode: Mode, endpoint: &str) -> String {
        format!(
            "\n{rule}\nChat with {persona}\nmode: {mode} | endpoint: {endpoint}\n\
             Type /help for commands. Press Ctrl+C to exit.\n{rule}\n\n",
            rule = RULE,
        )
    }

    /// Format one conversation message
    ///
    /// # Arguments
    ///
    /// * `message` - The message to display
    /// * `persona` - Persona shown as the assistant's name
    pub fn format_message(message: &Message, persona: Persona) -> String {
        let speaker = match message.role() {
            Role::User => "You",
            Role::Assistant => persona.as_str(),
        };
        format!(
            "\n[{}] {}: {}\n",
            timestamp_to_local_time_of_day(message.sent_at().value()),
            speaker,
            message.text()
        )
    }

    /// Format the indicator shown while a reply is pending
    pub fn format_thinking(persona: Persona) -> String {
        format!("{}: Thinking...\n", persona)
    }

    /// Format the session id line
    pub fn format_session_info(session_id: Option<&SessionId>) -> String {
        match session_id {
            Some(id) => format!("Session ID: {}\n", id),
            None => "No session yet. The first reply assigns one.\n".to_string(),
        }
    }

    /// Format an inline error
    pub fn format_error(error: &str) -> String {
        format!("! {}\n", error)
    }

    /// Format the notice for an ignored submission
    ///
    /// Empty input is ignored silently.
    pub fn format_rejection(reason: RejectReason) -> Option<String> {
        match reason {
            RejectReason::EmptyMessage => None,
            RejectReason::RequestPending => {
                Some("A reply is still pending. Wait for it before sending.\n".to_string())
            }
            RejectReason::NotEnoughHistory => Some(
                "Test memory needs at least two messages in the conversation.\n".to_string(),
            ),
        }
    }

    pub fn format_persona_changed(persona: Persona) -> String {
        format!("Persona set to {}.\n", persona)
    }

    pub fn format_mode_changed(mode: Mode) -> String {
        format!("Mode set to {}.\n", mode)
    }

    /// Format the command list
    ///
    /// `/memory` is listed only while the memory test would be accepted.
    pub fn format_help(memory_available: bool) -> String {
        let mut lines = vec![
            "Commands:",
            "  /persona <augustine|freud>       change the persona",
            "  /mode <conversation|reference>   change the mode",
        ];
        if memory_available {
            lines.push("  /memory                          ask what was discussed so far");
        }
        lines.extend([
            "  /session                         show the session id",
            "  /help                            show this list",
            "  /quit                            leave the chat",
            "Anything else is sent as a message.",
        ]);
        lines.join("\n") + "\n"
    }
}
