//! Message moderation model and decision rule.
//!
//! The rule is a pure function of one message, the bot's own user id, and the
//! configured target channel: messages in the target channel that carry no
//! image attachment are deleted, everything else is left alone.

use serenity::all::{ChannelId, Message, MessageId, UserId};

/// Content-type prefix Discord uses for image attachments.
pub const IMAGE_CONTENT_TYPE_PREFIX: &str = "image/";

/// The parts of a message-create event the moderation rule looks at.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomingMessage {
    pub author_id: UserId,
    pub channel_id: ChannelId,
    pub message_id: MessageId,
    /// Content type of each attachment, in order. Discord omits the content
    /// type for some uploads, in which case the entry is `None`.
    pub attachment_content_types: Vec<Option<String>>,
}

impl From<&Message> for IncomingMessage {
    fn from(message: &Message) -> Self {
        Self {
            author_id: message.author.id,
            channel_id: message.channel_id,
            message_id: message.id,
            attachment_content_types: message
                .attachments
                .iter()
                .map(|attachment| attachment.content_type.clone())
                .collect(),
        }
    }
}

impl IncomingMessage {
    /// Whether any attachment is an image.
    pub fn has_image_attachment(&self) -> bool {
        has_image_attachment(&self.attachment_content_types)
    }
}

/// Returns true if any content type starts with the literal `image/` prefix.
///
/// An empty list, a missing content type, or a bare `image` never count.
pub fn has_image_attachment(content_types: &[Option<String>]) -> bool {
    content_types
        .iter()
        .flatten()
        .any(|content_type| content_type.starts_with(IMAGE_CONTENT_TYPE_PREFIX))
}

/// Why a message was skipped without inspecting its attachments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Posted by the bot itself.
    SelfAuthored,
    /// Posted outside the moderated channel.
    OtherChannel,
}

/// Decision for a single message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Ignore(IgnoreReason),
    /// In the target channel with at least one image attachment.
    Keep,
    /// In the target channel without any image attachment.
    Delete,
}

/// Moderation settings for one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModerationPolicy {
    pub target_channel: ChannelId,
}

impl ModerationPolicy {
    pub fn new(target_channel: ChannelId) -> Self {
        Self { target_channel }
    }

    /// Decides what to do with a message.
    ///
    /// Filters apply in order and short-circuit: self-authored messages are
    /// ignored first, then messages from other channels, and only then are
    /// attachments inspected.
    ///
    /// # Arguments
    /// - `bot_user_id` - The bot's own account id
    /// - `message` - The incoming message
    ///
    /// # Returns
    /// - `Verdict::Ignore` - Self-authored or outside the target channel
    /// - `Verdict::Keep` - Has at least one image attachment
    /// - `Verdict::Delete` - Has no image attachment
    pub fn verdict(&self, bot_user_id: UserId, message: &IncomingMessage) -> Verdict {
        if message.author_id == bot_user_id {
            return Verdict::Ignore(IgnoreReason::SelfAuthored);
        }

        if message.channel_id != self.target_channel {
            return Verdict::Ignore(IgnoreReason::OtherChannel);
        }

        if message.has_image_attachment() {
            Verdict::Keep
        } else {
            Verdict::Delete
        }
    }
}
