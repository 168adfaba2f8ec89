use std::future::Future;

use serenity::all::{ChannelId, Client, EventHandler, GatewayIntents};

use crate::bot::handler::{DiscoveryHandler, ModerationHandler};
use crate::config::Config;
use crate::error::AppError;
use crate::model::message::ModerationPolicy;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The stop signal fired and the session was closed.
    Stopped,
    /// The client returned on its own without an error.
    Disconnected,
}

/// Gateway intents needed by both modes.
pub fn intents() -> GatewayIntents {
    GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT
}

/// Builds a Discord client for the configured token and handler.
///
/// No connection is made yet; that happens in `run_until`.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `handler` - Event handler to register on the client
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client construction failed
pub async fn connect<H>(config: &Config, handler: H) -> Result<Client, AppError>
where
    H: EventHandler + 'static,
{
    let client = Client::builder(&config.discord_bot_token, intents())
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Runs the client until `stop` resolves, then shuts all shards down.
///
/// # Arguments
/// - `client` - Client built by `connect`
/// - `stop` - Future resolving when the session should close
///
/// # Returns
/// - `Ok(SessionEnd)` - Session closed after `stop` resolved, or ended on its own
/// - `Err(AppError)` - The connection could not be opened or was lost
pub async fn run_until<F>(mut client: Client, stop: F) -> Result<SessionEnd, AppError>
where
    F: Future<Output = ()>,
{
    let shard_manager = client.shard_manager.clone();

    race_session(client.start(), stop, || async move {
        shard_manager.shutdown_all().await;
    })
    .await
}

/// Races a running session against its stop signal.
///
/// When `stop` wins, the session future is dropped before `close` runs, so
/// a session still opening its gateway connection is torn down as well.
/// `stop` is polled first, so a signal that is already pending always wins.
///
/// # Arguments
/// - `session` - Future driving the connection until it ends
/// - `stop` - Future resolving when the session should close
/// - `close` - Releases whatever the session left running
///
/// # Returns
/// - `Ok(SessionEnd::Stopped)` - `stop` resolved and `close` ran
/// - `Ok(SessionEnd::Disconnected)` - The session ended cleanly first
/// - `Err(AppError)` - The session failed first; `close` is not called
pub async fn race_session<S, E, F, C, CF>(
    session: S,
    stop: F,
    close: C,
) -> Result<SessionEnd, AppError>
where
    S: Future<Output = Result<(), E>>,
    E: Into<AppError>,
    F: Future<Output = ()>,
    C: FnOnce() -> CF,
    CF: Future<Output = ()>,
{
    tokio::select! {
        biased;

        _ = stop => {
            tracing::info!("Closing Discord session");
            close().await;

            Ok(SessionEnd::Stopped)
        }
        result = session => {
            match result {
                Ok(()) => Ok(SessionEnd::Disconnected),
                Err(e) => Err(e.into()),
            }
        }
    }
}

/// Runs moderation mode until SIGINT or SIGTERM is received.
///
/// # Arguments
/// - `config` - Application configuration
/// - `target_channel` - Channel in which imageless messages are deleted
pub async fn run_moderation(config: &Config, target_channel: ChannelId) -> Result<(), AppError> {
    let handler = ModerationHandler::new(ModerationPolicy::new(target_channel));
    let client = connect(config, handler).await?;

    let signal = shutdown_signal()?;

    tracing::info!(channel_id = %target_channel, "Starting Discord bot in moderation mode");

    run_until(client, signal).await?;

    Ok(())
}

/// Runs discovery mode: lists guilds and channels once, then disconnects.
///
/// # Arguments
/// - `config` - Application configuration
pub async fn run_discovery(config: &Config) -> Result<(), AppError> {
    let (handler, done) = DiscoveryHandler::new();
    let client = connect(config, handler).await?;

    tracing::info!("Starting Discord bot in discovery mode");

    let mut report = None;
    run_until(client, async {
        if let Ok(finished) = done.await {
            report = Some(finished);
        }
    })
    .await?;

    if let Some(report) = report {
        tracing::info!(
            guilds = report.guilds.len(),
            channels = report.channel_count(),
            failed = report.failed.len(),
            "Discovery complete"
        );
    }

    Ok(())
}

/// Installs SIGINT and SIGTERM listeners.
///
/// Listeners are registered immediately so a signal arriving before the
/// returned future is polled is not lost.
///
/// # Returns
/// - `Ok(future)` - Resolves on the first shutdown signal
/// - `Err(AppError::ShutdownSignal)` - A listener could not be installed
#[cfg(unix)]
pub fn shutdown_signal() -> Result<impl Future<Output = ()> + Send + 'static, AppError> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt()).map_err(AppError::ShutdownSignal)?;
    let mut terminate = signal(SignalKind::terminate()).map_err(AppError::ShutdownSignal)?;

    Ok(async move {
        tokio::select! {
            _ = interrupt.recv() => tracing::info!("Received SIGINT"),
            _ = terminate.recv() => tracing::info!("Received SIGTERM"),
        }
    })
}

#[cfg(not(unix))]
pub fn shutdown_signal() -> Result<impl Future<Output = ()> + Send + 'static, AppError> {
    Ok(async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for CTRL-C");
            std::future::pending::<()>().await;
        }
        tracing::info!("Received CTRL-C");
    })
}
