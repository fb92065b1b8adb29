//! Terminal chat client for a persona chat API.
//!
//! Reads messages from a readline prompt, sends each one to `POST /api/chat`
//! and prints the reply. Slash commands switch persona and mode, run the
//! memory test and show the session id.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin colloquy
//! cargo run --bin colloquy -- --url http://127.0.0.1:8000 --persona freud --mode reference
//! ```

use clap::Parser;

use colloquy_client::{
    config::{ClientConfig, DEFAULT_BASE_URL},
    domain::{Mode, Persona},
};
use colloquy_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "colloquy")]
#[command(about = "Terminal chat client for a persona chat API", long_about = None)]
struct Args {
    /// Base URL of the chat API
    #[arg(short = 'u', long, default_value = DEFAULT_BASE_URL)]
    url: String,

    /// Initial persona (augustine or freud)
    #[arg(short = 'p', long, default_value = "augustine")]
    persona: Persona,

    /// Initial mode (conversation or reference)
    #[arg(short = 'm', long, default_value = "conversation")]
    mode: Mode,

    /// Per-request timeout in seconds (defaults to no client-side timeout)
    #[arg(short = 't', long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "warn");

    let args = Args::parse();

    let config = match ClientConfig::new(&args.url, args.persona, args.mode, args.timeout_secs) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Run the client
    if let Err(e) = colloquy_client::ui::run_client(config).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
