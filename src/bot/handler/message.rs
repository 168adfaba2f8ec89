//! Message handler for image-only moderation.
//!
//! Every message-create event the bot receives passes through
//! `handle_message`. Messages in the moderated channel that do not carry an
//! image attachment are deleted. The handler keeps no state between events,
//! so concurrent invocations for different messages are independent.

use serenity::all::UserId;

use crate::bot::api::DiscordApi;
use crate::model::message::{IncomingMessage, ModerationPolicy, Verdict};

/// Applies the moderation policy to one message.
///
/// Deletion failures (message already gone, missing Manage Messages
/// permission, network errors) are logged and otherwise ignored so they never
/// affect the handling of later messages.
///
/// # Arguments
/// - `api` - Discord API used to delete the message
/// - `policy` - Moderation settings holding the target channel
/// - `bot_user_id` - The bot's own user id, used to skip its own messages
/// - `message` - The incoming message
///
/// # Returns
/// The verdict that was acted on.
pub async fn handle_message<A>(
    api: &A,
    policy: &ModerationPolicy,
    bot_user_id: UserId,
    message: &IncomingMessage,
) -> Verdict
where
    A: DiscordApi + ?Sized,
{
    let verdict = policy.verdict(bot_user_id, message);

    match verdict {
        Verdict::Ignore(_) => {}
        Verdict::Keep => {
            tracing::debug!(
                message_id = %message.message_id,
                "Keeping message with image attachment"
            );
        }
        Verdict::Delete => {
            tracing::info!(
                message_id = %message.message_id,
                "Deleting message without image attachment"
            );

            if let Err(e) = api
                .delete_message(message.channel_id, message.message_id)
                .await
            {
                tracing::error!(
                    message_id = %message.message_id,
                    error = %e,
                    "Error deleting message"
                );
            }
        }
    }

    verdict
}
