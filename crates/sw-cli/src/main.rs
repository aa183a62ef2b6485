//! SiteWorks command line tool
//!
//! Loads a dataset and prints filtered lists with their summaries.

use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use sw_core::config::AppConfig;
use sw_models::Dataset;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod output;

use cli::Cli;
use commands::Session;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    init_tracing(&config.log_filter, cli.log_json || config.log_json);

    let data_path = cli
        .data
        .clone()
        .or_else(|| config.data_path.clone())
        .context("no dataset given: pass --data or set SITEWORKS_DATA_PATH")?;
    let dataset = Dataset::load(&data_path)
        .with_context(|| format!("failed to load dataset {}", data_path.display()))?;

    let session = Session {
        dataset,
        today: cli.today.unwrap_or_else(|| config.effective_today()),
        policy: config.progress_policy,
        format: cli.format,
    };
    info!(
        version = env!("CARGO_PKG_VERSION"),
        today = %session.today,
        policy = ?session.policy,
        "Starting siteworks"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::run(&session, cli.command, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Initialize tracing/logging on stderr; `RUST_LOG` wins over the configured filter
fn init_tracing(default_filter: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(layer.json()).init();
    } else {
        registry.with(layer).init();
    }
}
