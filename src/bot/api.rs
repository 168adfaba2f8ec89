//! Outbound Discord calls used by the event handlers.
//!
//! Handlers depend on the `DiscordApi` trait instead of Serenity's `Http`
//! directly so the moderation and discovery logic can be exercised without a
//! gateway connection.

use std::future::Future;

use serenity::all::{ChannelId, GuildId, MessageId};
use serenity::async_trait;
use serenity::http::{GuildPagination, Http};

use crate::error::AppError;
use crate::model::discord::{ChannelSummary, GuildSummary};

/// Audit log reason attached to moderation deletes.
pub const DELETE_REASON: &str = "Message has no image attachment";

/// Largest page Discord returns from the current user's guild list.
pub const GUILDS_PAGE_LIMIT: u64 = 200;

#[async_trait]
pub trait DiscordApi: Send + Sync {
    /// Lists every guild the bot account has joined.
    async fn joined_guilds(&self) -> Result<Vec<GuildSummary>, AppError>;

    /// Lists all channels of a guild, of every kind.
    async fn guild_channels(&self, guild_id: GuildId) -> Result<Vec<ChannelSummary>, AppError>;

    /// Deletes a single message.
    async fn delete_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), AppError>;
}

#[async_trait]
impl DiscordApi for Http {
    async fn joined_guilds(&self) -> Result<Vec<GuildSummary>, AppError> {
        paginate_guilds(GUILDS_PAGE_LIMIT, |after| async move {
            let page = self
                .get_guilds(after.map(GuildPagination::After), Some(GUILDS_PAGE_LIMIT))
                .await?;

            let guilds = page.into_iter().map(GuildSummary::from).collect();

            Ok::<Vec<GuildSummary>, AppError>(guilds)
        })
        .await
    }

    async fn guild_channels(&self, guild_id: GuildId) -> Result<Vec<ChannelSummary>, AppError> {
        let channels = self.get_channels(guild_id).await?;

        Ok(channels.into_iter().map(ChannelSummary::from).collect())
    }

    async fn delete_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), AppError> {
        Http::delete_message(self, channel_id, message_id, Some(DELETE_REASON)).await?;

        Ok(())
    }
}

/// Collects every page of a guild listing.
///
/// Each page is requested after the last guild id of the previous one. A
/// page shorter than `limit` is the last.
///
/// # Arguments
/// - `limit` - Page size requested from Discord
/// - `fetch` - Fetches the page following the given guild id, or the first page for `None`
///
/// # Returns
/// - `Ok(Vec<GuildSummary>)` - All guilds in the order Discord returned them
/// - `Err(AppError)` - A page request failed
pub async fn paginate_guilds<F, Fut>(
    limit: u64,
    mut fetch: F,
) -> Result<Vec<GuildSummary>, AppError>
where
    F: FnMut(Option<GuildId>) -> Fut,
    Fut: Future<Output = Result<Vec<GuildSummary>, AppError>>,
{
    let mut guilds = Vec::new();
    let mut after = None;

    loop {
        let page = fetch(after).await?;
        let is_full = page.len() as u64 >= limit;

        after = page.last().map(|guild| guild.id);
        guilds.extend(page);

        if !is_full || after.is_none() {
            break;
        }
    }

    Ok(guilds)
}
