//! Terminal to-do list
//!
//! Reads commands from stdin and redraws the list after each one.
//! Logs go to stderr; set `RUST_LOG` to change the level.

use anyhow::Context;
use todolist::{App, AppEnvironment, Config, RenderOptions, Shell};
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| todolist::config::DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(
        text_policy = ?config.text_policy,
        ansi = config.ansi,
        max_feedback_actions = config.store.max_feedback_actions,
        "Starting todolist"
    );

    let app = App::new(&config, AppEnvironment::production());
    let mut shell = Shell::new(app, RenderOptions { ansi: config.ansi });

    shell
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
        .context("terminal session failed")?;

    Ok(())
}
