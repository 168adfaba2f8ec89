//! Ready event handler for discovery mode.
//!
//! When no target channel is configured, the bot connects only to report
//! where it could be pointed: every joined guild and its text channels are
//! logged, and the resulting report is handed back to the main task, which
//! then closes the session.

use serenity::all::Ready;
use tokio::sync::{oneshot, Mutex};

use crate::bot::api::DiscordApi;
use crate::model::discord::{DiscoveryReport, GuildListing};

/// Handles the ready event in discovery mode.
///
/// Logs the connected account, then lists guilds and channels and sends the
/// report through `done`.
///
/// # Arguments
/// - `api` - Discord API used to list guilds and channels
/// - `done` - Completion signal for the main task
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready<A>(
    api: &A,
    done: &Mutex<Option<oneshot::Sender<DiscoveryReport>>>,
    ready: Ready,
) where
    A: DiscordApi + ?Sized,
{
    tracing::info!(user = %ready.user.name, "Connected to Discord");

    discover(api, done).await;
}

/// Runs discovery and signals completion to the main task.
///
/// The sender is taken on first use; a later call still lists the guilds but
/// has nobody left to notify.
pub async fn discover<A>(api: &A, done: &Mutex<Option<oneshot::Sender<DiscoveryReport>>>)
where
    A: DiscordApi + ?Sized,
{
    let report = list_guilds(api).await;

    let Some(sender) = done.lock().await.take() else {
        return;
    };

    if sender.send(report).is_err() {
        tracing::warn!("Discovery finished after the session stopped waiting for it");
    }
}

/// Lists the text channels of every joined guild.
///
/// A failure to list one guild's channels is logged and recorded in the
/// report, then the remaining guilds are processed. Guild order is whatever
/// Discord returns.
///
/// # Arguments
/// - `api` - Discord API used to list guilds and channels
///
/// # Returns
/// A report with one listing per guild whose channels could be fetched, and
/// the ids of those that could not. If the guild list itself cannot be
/// fetched the report is empty.
pub async fn list_guilds<A>(api: &A) -> DiscoveryReport
where
    A: DiscordApi + ?Sized,
{
    let mut report = DiscoveryReport::default();

    let guilds = match api.joined_guilds().await {
        Ok(guilds) => guilds,
        Err(e) => {
            tracing::error!(error = %e, "Error getting guilds");
            return report;
        }
    };

    for guild in guilds {
        tracing::info!(name = %guild.name, id = %guild.id, "Guild");

        let channels = match api.guild_channels(guild.id).await {
            Ok(channels) => channels,
            Err(e) => {
                tracing::error!(guild_id = %guild.id, error = %e, "Error getting channels");
                report.failed.push(guild.id);
                continue;
            }
        };

        let text_channels: Vec<_> = channels.into_iter().filter(|c| c.is_text()).collect();

        for channel in &text_channels {
            tracing::info!(name = %channel.name, id = %channel.id, "Channel");
        }

        report.guilds.push(GuildListing {
            guild,
            text_channels,
        });
    }

    report
}
