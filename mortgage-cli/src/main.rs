use std::io;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use mortgage_cli::App;
use mortgage_core::{LendingGuidelines, WizardSession};
use mortgage_webhook::{DeliverySink, WebhookClient};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Mortgage readiness calculator.
///
/// Walks through the four-step wizard, computes a readiness verdict plus an
/// estimated home-price range, and optionally forwards each result to a
/// webhook endpoint.
#[derive(Debug, Parser)]
struct Cli {
    /// Webhook endpoint URL. Forwarding is disabled when absent.
    #[arg(long)]
    webhook_url: Option<String>,

    /// Webhook request timeout in seconds.
    #[arg(long, default_value = "10")]
    timeout_secs: u64,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let sink: Option<Arc<dyn DeliverySink>> = match &cli.webhook_url {
        Some(url) => {
            debug!("forwarding results to {}", url);
            let client =
                WebhookClient::with_timeout(url.clone(), Duration::from_secs(cli.timeout_secs))?;
            Some(Arc::new(client))
        }
        None => None,
    };

    let session = WizardSession::new(LendingGuidelines::default());
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    App::new(session, sink, stdin, stdout).run()?;

    Ok(())
}
