//! ytsearch: print normalized YouTube search results as JSON
//!
//! Usage: `ytsearch <keyword> [maxResults]`. Exactly one JSON object is
//! written to stdout and the process always exits 0; logs go to stderr.

use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use ytsearch_rs::cli::{self, CliArgs};
use ytsearch_rs::{config, ResponseEnvelope};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logging();

    let envelope = cli::run(CliArgs::from_env(), config::load()).await;
    emit(&envelope);
}

/// Log to stderr; stdout carries only the envelope
fn init_logging() {
    let default_level = match std::env::var("YTSEARCH_DEBUG") {
        Ok(val) if val.parse().unwrap_or(false) => "debug",
        _ => "warn",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .init();
}

fn emit(envelope: &ResponseEnvelope) {
    debug!(
        "Writing response: success={} count={}",
        envelope.is_success(),
        envelope.count()
    );

    let stdout = std::io::stdout();
    if let Err(e) = envelope.write_to(stdout.lock()) {
        error!("Failed to write response: {}", e);
    }
}
