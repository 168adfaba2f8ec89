//! Guild and channel listing models used in discovery mode.

use serenity::all::{ChannelId, ChannelType, GuildChannel, GuildId, GuildInfo};

/// A guild the bot has joined.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildSummary {
    pub id: GuildId,
    pub name: String,
}

impl From<GuildInfo> for GuildSummary {
    fn from(guild: GuildInfo) -> Self {
        Self {
            id: guild.id,
            name: guild.name,
        }
    }
}

/// A channel within a guild, of any kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSummary {
    pub id: ChannelId,
    pub name: String,
    pub kind: ChannelType,
}

impl ChannelSummary {
    /// Whether this is a regular guild text channel.
    pub fn is_text(&self) -> bool {
        self.kind == ChannelType::Text
    }
}

impl From<GuildChannel> for ChannelSummary {
    fn from(channel: GuildChannel) -> Self {
        Self {
            id: channel.id,
            name: channel.name,
            kind: channel.kind,
        }
    }
}

/// Text channels discovered in a single guild.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildListing {
    pub guild: GuildSummary,
    pub text_channels: Vec<ChannelSummary>,
}

/// Outcome of one discovery pass over every joined guild.
///
/// Guilds whose channel listing failed appear only in `failed`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscoveryReport {
    pub guilds: Vec<GuildListing>,
    pub failed: Vec<GuildId>,
}

impl DiscoveryReport {
    pub fn channel_count(&self) -> usize {
        self.guilds.iter().map(|g| g.text_channels.len()).sum()
    }
}
