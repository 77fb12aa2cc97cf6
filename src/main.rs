//! foliosync binary entry point.
//!
//! Boots the portfolio data layer headless: seeds render state from cache,
//! arms the first-paint failsafe, runs one background reconciliation pass
//! against the content API, and reports what the page would show.

use std::io;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use foliosync::api::ContentStore;
use foliosync::{ApiClient, CacheStore, Config, SyncCoordinator};

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Set up logging with environment-based filter
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();
    info!("foliosync starting");

    let config = Config::load().context("Failed to load configuration")?;
    let base_url = config
        .api_base_url
        .clone()
        .context("No API base URL configured (set FOLIOSYNC_API_URL)")?;
    let api_key = config
        .api_key
        .clone()
        .context("No API key configured (set FOLIOSYNC_API_KEY)")?;

    let cache = CacheStore::new(config.cache_dir()?)?;
    let client = ApiClient::new(base_url, api_key)?;

    // Seed render state from cache (or bundled defaults) before touching
    // the network, then reconcile.
    let mut sync = SyncCoordinator::new(cache);
    info!(
        loading = sync.is_loading(),
        skills = sync.state().skills.len(),
        projects = sync.state().projects.len(),
        "Seeded render state"
    );

    let failsafe = sync.spawn_failsafe();
    sync.refresh(&client).await;
    failsafe.abort();

    let state = sync.state();
    info!(
        hero = %state.hero.name,
        skills = state.skills.len(),
        experiences = state.experiences.len(),
        projects = state.projects.len(),
        "Reconciliation complete"
    );

    match client.fetch_stats().await {
        Ok(stats) => info!(
            messages = stats.messages_received,
            last_sync = %stats.last_sync,
            "Dashboard stats"
        ),
        Err(e) => info!(error = %e, "Stats unavailable"),
    }

    Ok(())
}
