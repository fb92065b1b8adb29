//! Incremental rendering of the conversation state.

use crate::domain::ConversationState;

use super::formatter::MessageFormatter;

/// Turns successive state snapshots into transcript output.
///
/// Only what is new since the previous call is printed, so the transcript
/// follows the newest message. Markers are keyed by history length because
/// a `watch` receiver may skip intermediate states.
#[derive(Debug, Default)]
pub struct TranscriptRenderer {
    rendered_messages: usize,
    session_shown: bool,
    thinking_shown_at: Option<usize>,
    error_shown_at: Option<usize>,
}

impl TranscriptRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render everything that changed since the last call
    pub fn render(&mut self, state: &ConversationState) -> String {
        let mut output = String::new();
        let messages = state.messages();

        for message in messages.iter().skip(self.rendered_messages) {
            output.push_str(&MessageFormatter::format_message(message, state.persona()));
        }
        self.rendered_messages = messages.len();

        if !self.session_shown
            && let Some(session_id) = state.session_id()
        {
            output.push_str(&MessageFormatter::format_session_info(Some(session_id)));
            self.session_shown = true;
        }

        if state.is_pending() && self.thinking_shown_at != Some(messages.len()) {
            output.push_str(&MessageFormatter::format_thinking(state.persona()));
            self.thinking_shown_at = Some(messages.len());
        }

        if let Some(error) = state.last_error()
            && self.error_shown_at != Some(messages.len())
        {
            output.push_str(&MessageFormatter::format_error(error));
            self.error_shown_at = Some(messages.len());
        }

        output
    }
}
