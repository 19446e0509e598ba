//! Address Book - Main entry point
//!
//! Runs the interactive assistant bot on stdin/stdout. Logs go to stderr so
//! they never interleave with replies.

use address_book::{Config, Session, SystemClock};
use anyhow::Result;
use tokio::io::{self, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Configuration first so LOG_LEVEL from .env can seed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        window_days = config.birthday_window_days,
        "Starting address book assistant"
    );

    let mut session = Session::new(SystemClock, config.birthday_window_days);
    let stdin = BufReader::new(io::stdin());
    let stdout = io::stdout();

    address_book::run(&mut session, stdin, stdout, &config.prompt).await?;

    info!(
        contacts = session.directory().len(),
        "Address book assistant shutdown complete"
    );
    Ok(())
}
