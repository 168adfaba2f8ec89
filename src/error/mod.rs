//! Error types for the bot process.
//!
//! The bot is a standalone process, so errors are never surfaced to a caller.
//! Startup failures bubble up to `main` as an `AppError` and are logged once
//! before the process exits. Per-event failures (a single delete, a single
//! guild's channel listing) are logged by the handlers and then dropped.

pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
///
/// Aggregates everything that can end the process early. Most variants use
/// `#[from]` for automatic conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error while reading the environment.
    ///
    /// Raised before any Discord client is constructed, so no connection is
    /// ever attempted when this occurs.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord API or gateway error from Serenity.
    ///
    /// Boxed due to large size. Covers client construction, gateway
    /// connection failures, and failed REST calls.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Failure to install the OS signal listeners used for shutdown.
    #[error("Failed to listen for shutdown signal: {0}")]
    ShutdownSignal(#[source] std::io::Error),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
