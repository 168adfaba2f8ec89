use std::collections::{HashMap, HashSet};
use std::sync::Mutex as StdMutex;

use serenity::all::{ChannelId, ChannelType, GuildId, MessageId, UserId};
use serenity::async_trait;

use crate::bot::api::DiscordApi;
use crate::error::AppError;
use crate::model::discord::{ChannelSummary, GuildSummary};
use crate::model::message::{IncomingMessage, ModerationPolicy, Verdict};


/// In-memory `DiscordApi` that records deletes and can be scripted to fail.
#[derive(Default)]
pub struct FakeDiscord {
    guilds: Vec<GuildSummary>,
    channels: HashMap<GuildId, Vec<ChannelSummary>>,
    failing_guilds: HashSet<GuildId>,
    fail_guild_list: bool,
    fail_deletes: bool,
    deleted: StdMutex<Vec<(ChannelId, MessageId)>>,
    listed: StdMutex<Vec<GuildId>>,
}

impl FakeDiscord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn guild(mut self, id: u64, name: &str, channels: Vec<ChannelSummary>) -> Self {
        let id = GuildId::new(id);
        self.guilds.push(GuildSummary {
            id,
            name: name.to_string(),
        });
        self.channels.insert(id, channels);
        self
    }

    pub fn failing_guild(mut self, id: u64, name: &str) -> Self {
        let id = GuildId::new(id);
        self.guilds.push(GuildSummary {
            id,
            name: name.to_string(),
        });
        self.failing_guilds.insert(id);
        self
    }

    pub fn fail_guild_list(mut self) -> Self {
        self.fail_guild_list = true;
        self
    }

    pub fn fail_deletes(mut self) -> Self {
        self.fail_deletes = true;
        self
    }

    pub fn deleted(&self) -> Vec<(ChannelId, MessageId)> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn listed(&self) -> Vec<GuildId> {
        self.listed.lock().unwrap().clone()
    }
}

#[async_trait]
impl DiscordApi for FakeDiscord {
    async fn joined_guilds(&self) -> Result<Vec<GuildSummary>, AppError> {
        if self.fail_guild_list {
            return Err(serenity::Error::Other("guild list unavailable").into());
        }

        Ok(self.guilds.clone())
    }

    async fn guild_channels(&self, guild_id: GuildId) -> Result<Vec<ChannelSummary>, AppError> {
        self.listed.lock().unwrap().push(guild_id);

        if self.failing_guilds.contains(&guild_id) {
            return Err(serenity::Error::Other("missing access").into());
        }

        Ok(self.channels.get(&guild_id).cloned().unwrap_or_default())
    }

    async fn delete_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), AppError> {
        self.deleted.lock().unwrap().push((channel_id, message_id));

        if self.fail_deletes {
            return Err(serenity::Error::Other("unknown message").into());
        }

        Ok(())
    }
}

pub const BOT_ID: UserId = UserId::new(10);
pub const MEMBER_ID: UserId = UserId::new(20);
pub const TARGET_CHANNEL: ChannelId = ChannelId::new(1000);
pub const OTHER_CHANNEL: ChannelId = ChannelId::new(2000);

pub fn policy() -> ModerationPolicy {
    ModerationPolicy::new(TARGET_CHANNEL)
}

pub fn incoming(
    author: UserId,
    channel: ChannelId,
    message_id: u64,
    content_types: &[Option<&str>],
) -> IncomingMessage {
    IncomingMessage {
        author_id: author,
        channel_id: channel,
        message_id: MessageId::new(message_id),
        attachment_content_types: content_types
            .iter()
            .map(|ct| ct.map(str::to_string))
            .collect(),
    }
}

pub fn channel(id: u64, name: &str, kind: ChannelType) -> ChannelSummary {
    ChannelSummary {
        id: ChannelId::new(id),
        name: name.to_string(),
        kind,
    }
}

pub fn assert_ignored(verdict: Verdict) {
    assert!(
        matches!(verdict, Verdict::Ignore(_)),
        "expected message to be ignored, got {:?}",
        verdict
    );
}
