//! Terminal chat client.

mod command;
mod error;
mod formatter;
mod prompt;
mod renderer;
mod runner;

pub use command::{Command, parse_command};
pub use error::ClientError;
pub use formatter::MessageFormatter;
pub use renderer::TranscriptRenderer;
pub use runner::run_client;
