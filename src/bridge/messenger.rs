use crate::adapters::MessageSender;
use crate::bridge::message_payload::MessageBuilder;
use crate::error::ButtonsError;
use serenity::model::channel::{Channel, ChannelType, Message};
use serenity::model::id::ChannelId;
use std::sync::Arc;
use tracing::{debug, info};

/// Send messages with buttons
///
/// Holds the sender it was constructed with; nothing is shared globally.
pub struct ButtonMessenger<S>
where
    S: MessageSender,
{
    sender: Arc<S>,
}

impl<S> ButtonMessenger<S>
where
    S: MessageSender,
{
    pub fn new(sender: Arc<S>) -> Self {
        Self { sender }
    }

    /// Send a message to a channel
    ///
    /// Fails with [`ButtonsError::InvalidTarget`] if the channel cannot hold
    /// messages, and with [`ButtonsError::RowCapacityExceeded`] if the button
    /// layout is invalid. Neither case reaches the network.
    pub async fn send(
        &self,
        target: &Channel,
        message: MessageBuilder,
    ) -> Result<Message, ButtonsError> {
        let channel_id = messageable_channel_id(target)?;
        self.send_to(channel_id, message).await
    }

    /// Send a message to a channel by ID, without checking its kind
    pub async fn send_to(
        &self,
        channel_id: ChannelId,
        message: MessageBuilder,
    ) -> Result<Message, ButtonsError> {
        let payload = message.build()?;

        debug!(
            channel_id = %channel_id,
            rows = payload.components.len(),
            embeds = payload.embeds.len(),
            "Sending message"
        );

        let sent = self.sender.create_message(channel_id, &payload).await?;

        info!(
            message_id = %sent.id,
            channel_id = %channel_id,
            rows = payload.components.len(),
            "Successfully sent message"
        );

        Ok(sent)
    }
}

/// Resolve the ID of a channel that accepts messages
///
/// Text, announcement, voice/stage text chats, threads and DMs accept
/// messages. Categories, forums and directories do not.
pub fn messageable_channel_id(channel: &Channel) -> Result<ChannelId, ButtonsError> {
    match channel {
        Channel::Guild(guild_channel) => match guild_channel.kind {
            ChannelType::Text
            | ChannelType::News
            | ChannelType::Voice
            | ChannelType::Stage
            | ChannelType::NewsThread
            | ChannelType::PublicThread
            | ChannelType::PrivateThread => Ok(guild_channel.id),
            kind => Err(ButtonsError::InvalidTarget {
                channel_id: guild_channel.id,
                kind: Some(kind),
            }),
        },
        Channel::Private(private_channel) => Ok(private_channel.id),
        other => Err(ButtonsError::InvalidTarget {
            channel_id: other.id(),
            kind: None,
        }),
    }
}
