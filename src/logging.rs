use crate::errors::{AppError, AppResult};
use std::io::IsTerminal;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

/// Initializes the tracing subscriber used by the server.
/// `RUST_LOG` wins over the configured level.
pub fn init_tracing(level: Option<&str>) -> AppResult<()> {
    let default_level = level.unwrap_or("info");
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(std::io::stdout().is_terminal())
        .try_init()
        .map_err(|err| AppError::Other(err.to_string()))?;

    Ok(())
}
