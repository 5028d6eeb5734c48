//! Marks processor - attendance punch classification service
//!
//! Accepts an attendance spreadsheet upload over HTTP, classifies each
//! person-day's raw punches into the four expected events (clock-in,
//! lunch-start, lunch-end, clock-out) by minimum-cost assignment, and
//! returns the regenerated spreadsheet.
//!
//! Module structure:
//! - `domain/` - Core business types (EventSlot, MarkRow, ScheduleTable)
//! - `services/` - Classification engine (cost matrix, Hungarian solver, batch)
//! - `io/` - External interfaces (xlsx import/export, timestamps, HTTP)
//! - `infra/` - Infrastructure (Config)

use clap::Parser;
use marks_processor::domain::ScheduleTable;
use marks_processor::infra::Config;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

/// Marks processor - attendance punch classification service
#[derive(Parser, Debug)]
#[command(name = "marks-processor", version, about)]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "config/dev.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize structured logging with configurable level via RUST_LOG env var
    // Default: INFO, use RUST_LOG=debug for per-group classification detail
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(UtcTime::rfc_3339())
        .with_target(false)
        .init();

    info!(git_hash = env!("GIT_HASH"), "marks-processor starting");

    let args = Args::parse();
    let config = Config::load_from_path(&args.config);

    info!(
        config_file = %config.config_file(),
        bind_address = %config.bind_address(),
        port = %config.port(),
        max_upload_bytes = %config.max_upload_bytes(),
        "config_loaded"
    );

    // The event schedule is a fixed business rule, built once and shared
    // read-only with every request handler
    let schedule = Arc::new(ScheduleTable::standard());

    // Create shutdown signal wired to Ctrl+C
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("shutdown_signal_received");
        let _ = shutdown_tx.send(true);
    });

    marks_processor::io::http::start_server(&config, schedule, shutdown_rx).await?;

    info!("marks-processor shutdown complete");
    Ok(())
}
