//! Tool server entry point.
//!
//! Reads one JSON request per line from stdin and writes one JSON response
//! per line to stdout. Logs go to stderr.

mod config;
mod dispatch;
mod render;
mod resources;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use clash_client::DexClient;
use config::ServerConfig;
use dispatch::Dispatcher;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();
    setup_logging(&config.log_level);

    let client = DexClient::new(config.client_config())?;
    let dispatcher = Arc::new(Dispatcher::new(client, config.battle_config()?, config.seed));

    tracing::info!(
        base_url = %config.base_url,
        level = config.level,
        max_turns = config.max_turns,
        "Server ready"
    );

    let (tx, mut rx) = mpsc::unbounded_channel::<String>();

    // Single writer keeps response lines whole
    let writer = tokio::spawn(async move {
        let mut stdout = tokio::io::stdout();
        while let Some(line) = rx.recv().await {
            stdout.write_all(line.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
        Ok::<_, std::io::Error>(())
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        if line.trim().is_empty() {
            continue;
        }

        let dispatcher = Arc::clone(&dispatcher);
        let tx = tx.clone();
        tokio::spawn(async move {
            let response = dispatcher.handle_line(&line).await;
            if tx.send(response.to_wire_format()).is_err() {
                tracing::warn!("Response dropped, writer closed");
            }
        });
    }

    tracing::info!("stdin closed, draining in-flight requests");
    drop(tx);
    writer
        .await
        .context("Writer task failed")?
        .context("Failed to write to stdout")?;

    Ok(())
}

/// Log to stderr so stdout carries only responses
fn setup_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
