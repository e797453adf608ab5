//! WebGrip CLI.
//!
//! Loads a page fixture, then services automation requests as JSON Lines:
//! one request object per stdin line, one response object per stdout line.
//! This is the same request/response envelope an embedding host would use,
//! which makes the binary handy for driving the engine from scripts:
//!
//! ```text
//! echo '{"action":"clickElement","text":"Sign in"}' | webgrip fixtures/login.json
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use webgrip_engine::dom::PageDocument;
use webgrip_engine::{EnginePolicy, PageSession};

/// WebGrip CLI.
#[derive(Parser)]
#[command(name = "webgrip")]
#[command(about = "Page automation engine for a conversational browser agent")]
#[command(version)]
struct Cli {
    /// Page fixture (JSON) to load as the working document
    fixture: PathBuf,

    /// Emit logs as JSON instead of human-readable text
    #[arg(long)]
    json_logs: bool,

    /// Fuzzy text-match threshold, fraction of query tokens that must appear
    #[arg(long, value_name = "RATIO")]
    fuzzy_threshold: Option<f64>,
}

fn init_tracing(json_logs: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr so stdout stays a clean response stream.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);
    if json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let raw = std::fs::read_to_string(&cli.fixture)
        .with_context(|| format!("failed to read fixture {}", cli.fixture.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("fixture {} is not valid JSON", cli.fixture.display()))?;
    let doc = PageDocument::from_json(value)
        .with_context(|| format!("fixture {} is not a valid page", cli.fixture.display()))?;

    let mut policy = EnginePolicy::default();
    if let Some(threshold) = cli.fuzzy_threshold {
        policy.fuzzy_threshold = threshold;
    }

    info!(
        fixture = %cli.fixture.display(),
        nodes = doc.len(),
        "document loaded"
    );
    let session = PageSession::with_policy(doc, policy);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let payload = match serde_json::from_str::<serde_json::Value>(line) {
            Ok(payload) => payload,
            Err(err) => {
                debug!(error = %err, "discarding unparseable request line");
                serde_json::Value::Null
            }
        };
        let response = webgrip_engine::handle(&session, payload).await;
        let mut encoded = serde_json::to_vec(&response)?;
        encoded.push(b'\n');
        stdout.write_all(&encoded).await?;
        stdout.flush().await?;
    }

    info!("input stream closed, shutting down");
    Ok(())
}
