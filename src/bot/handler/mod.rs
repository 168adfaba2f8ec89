use serenity::all::{Context, EventHandler, Message, Ready};
use serenity::async_trait;
use tokio::sync::{oneshot, Mutex};

use crate::model::discord::DiscoveryReport;
use crate::model::message::{IncomingMessage, ModerationPolicy};

pub mod message;
pub mod ready;

#[cfg(test)]
mod test;

/// Event handler for moderation mode.
pub struct ModerationHandler {
    pub policy: ModerationPolicy,
}

impl ModerationHandler {
    pub fn new(policy: ModerationPolicy) -> Self {
        Self { policy }
    }
}

#[async_trait]
impl EventHandler for ModerationHandler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, _ctx: Context, ready: Ready) {
        tracing::info!(
            user = %ready.user.name,
            channel_id = %self.policy.target_channel,
            "Bot is now running. Press CTRL-C to exit."
        );
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        let bot_user_id = ctx.cache.current_user().id;
        let incoming = IncomingMessage::from(&message);

        message::handle_message(&*ctx.http, &self.policy, bot_user_id, &incoming).await;
    }
}

/// Event handler for discovery mode.
///
/// Lists guilds and channels on the first ready event and hands the report
/// to whoever holds the receiving end of `done`.
pub struct DiscoveryHandler {
    done: Mutex<Option<oneshot::Sender<DiscoveryReport>>>,
}

impl DiscoveryHandler {
    /// Creates the handler along with the receiver that resolves once
    /// discovery has finished.
    pub fn new() -> (Self, oneshot::Receiver<DiscoveryReport>) {
        let (tx, rx) = oneshot::channel();

        let handler = Self {
            done: Mutex::new(Some(tx)),
        };

        (handler, rx)
    }
}

#[async_trait]
impl EventHandler for DiscoveryHandler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&*ctx.http, &self.done, ready).await;
    }
}
