mod config;
mod console;
mod event_loop;
mod provider_http;

use std::sync::Arc;

use anyhow::{Context, Result};
use feed::{FeedSession, QueryController};
use tokio::io::BufReader;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::AppConfig;
use crate::provider_http::HttpSearchBackend;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cfg = AppConfig::from_env()?;

    let backend = HttpSearchBackend::new(cfg.endpoint(), cfg.request_timeout)
        .context("Failed to build HTTP client")?;
    info!(endpoint=%cfg.endpoint(), page_size=cfg.page_size, "runway-feed: starting");

    let controller = QueryController::new(cfg.feed_config(), cfg.label_formatter());
    let session = FeedSession::new(controller, Arc::new(backend));

    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_signal.cancel();
        }
    });

    let stdin = BufReader::new(tokio::io::stdin());
    event_loop::run(session, cfg.initial_query.clone(), stdin, cancel).await
}
