mod bot;
mod config;
mod error;
mod model;
mod startup;

use crate::bot::start;
use crate::config::{Config, Mode, DISCORD_CHANNEL_ID};
use crate::error::{config::ConfigError, AppError};

#[tokio::main]
async fn main() {
    startup::init_logging();

    if let Err(e) = run(Config::from_env).await {
        tracing::error!(error = %e, "Fatal error");
    }
}

/// Loads configuration and runs the selected mode.
///
/// Configuration errors return before any Discord client is built.
async fn run<L>(load_config: L) -> Result<(), AppError>
where
    L: FnOnce() -> Result<Config, ConfigError>,
{
    let config = load_config()?;

    match config.mode() {
        Mode::Discovery => {
            tracing::error!("{} environment variable not set", DISCORD_CHANNEL_ID);
            tracing::info!("Available guilds and channels:");

            start::run_discovery(&config).await
        }
        Mode::Moderation(channel_id) => start::run_moderation(&config, channel_id).await,
    }
}
