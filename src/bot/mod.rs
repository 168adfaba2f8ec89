//! Discord bot integration for image-only channel moderation.
//!
//! The bot runs in one of two modes. In moderation mode it watches a single
//! channel and deletes every message that does not carry an image attachment.
//! In discovery mode, used when no channel is configured, it connects once,
//! logs the guilds and text channels it can see, and disconnects.
//!
//! Gateway connection management (handshake, heartbeats, reconnects, rate
//! limits) is left entirely to Serenity.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild state so the cache knows the bot's guilds
//! - `GUILD_MESSAGES` - Receive message create events in guild channels
//! - `MESSAGE_CONTENT` - Receive attachments on those messages (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal. Without it Discord sends message events
//! with an empty attachment list, and every message would look imageless.
//!
//! The bot also needs the Manage Messages permission in the moderated channel.

pub mod api;
pub mod handler;
pub mod start;
