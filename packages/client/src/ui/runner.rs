//! Interactive client session.

use std::sync::Arc;

use colloquy_shared::time::SystemClock;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::{sync::mpsc, task::JoinHandle};

use crate::{
    config::ClientConfig,
    domain::RejectReason,
    infrastructure::gateway::HttpChatGateway,
    usecase::{ChatClient, ExchangeOutcome, PendingExchange},
};

use super::{
    command::{Command, parse_command},
    error::ClientError,
    formatter::MessageFormatter,
    prompt::{PROMPT, redisplay_prompt},
    renderer::TranscriptRenderer,
};

/// Run the chat client until the user quits
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created.
pub async fn run_client(config: ClientConfig) -> Result<(), ClientError> {
    let gateway = HttpChatGateway::new(config.chat_endpoint(), config.timeout)?;
    let endpoint = gateway.endpoint().to_string();
    let client = ChatClient::new(
        Arc::new(gateway),
        Arc::new(SystemClock),
        config.persona,
        config.mode,
    );

    tracing::info!("Using chat endpoint {}", endpoint);
    print!(
        "{}",
        MessageFormatter::format_banner(config.persona, config.mode, &endpoint)
    );

    let render_task = spawn_renderer(&client);
    let mut input_rx = spawn_readline();
    let mut in_flight: Option<JoinHandle<ExchangeOutcome>> = None;

    while let Some(line) = input_rx.recv().await {
        match parse_command(&line) {
            Command::Send(text) => {
                if let Some(handle) = start_exchange(client.begin_message(&text)) {
                    in_flight = Some(handle);
                }
            }
            Command::TestMemory => {
                if let Some(handle) = start_exchange(client.begin_memory_test()) {
                    in_flight = Some(handle);
                }
            }
            Command::ChangePersona(persona) => {
                client.change_persona(persona);
                print_notice(&MessageFormatter::format_persona_changed(persona));
            }
            Command::ChangeMode(mode) => {
                client.change_mode(mode);
                print_notice(&MessageFormatter::format_mode_changed(mode));
            }
            Command::ShowSession => {
                let state = client.snapshot();
                print_notice(&MessageFormatter::format_session_info(state.session_id()));
            }
            Command::Help => {
                let memory_available = client.snapshot().can_test_memory();
                print_notice(&MessageFormatter::format_help(memory_available));
            }
            Command::Invalid(hint) => print_notice(&format!("{}\n", hint)),
            Command::Quit => break,
        }
    }

    // Dropping an unfinished exchange releases the pending flag
    if let Some(handle) = in_flight {
        handle.abort();
    }
    render_task.abort();

    tracing::info!("Client session ended");
    Ok(())
}

/// Spawn a task that prints state changes as they happen
fn spawn_renderer(client: &ChatClient) -> JoinHandle<()> {
    let mut receiver = client.subscribe();
    tokio::spawn(async move {
        let mut renderer = TranscriptRenderer::new();
        while receiver.changed().await.is_ok() {
            let output = renderer.render(&receiver.borrow_and_update());
            if !output.is_empty() {
                print!("{}", output);
                redisplay_prompt();
            }
        }
    })
}

/// Send an accepted exchange in the background so input stays responsive
fn start_exchange(
    started: Result<PendingExchange, RejectReason>,
) -> Option<JoinHandle<ExchangeOutcome>> {
    match started {
        Ok(exchange) => Some(tokio::spawn(exchange.send_to_api())),
        Err(reason) => {
            if let Some(notice) = MessageFormatter::format_rejection(reason) {
                print_notice(&notice);
            }
            None
        }
    }
}

fn print_notice(notice: &str) {
    print!("{}", notice);
    redisplay_prompt();
}

/// Spawn a blocking thread for rustyline (synchronous readline)
///
/// Lines arrive on the returned channel; it closes on Ctrl+C, Ctrl+D or a
/// readline error.
fn spawn_readline() -> mpsc::UnboundedReceiver<String> {
    let (input_tx, input_rx) = mpsc::unbounded_channel::<String>();

    std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                tracing::error!("Failed to initialize readline: {}", e);
                return;
            }
        };

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    rl.add_history_entry(line).ok();
                    if input_tx.send(line.to_string()).is_err() {
                        // Channel closed, exit thread
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    input_rx
}
