use crate::bridge::message_payload::MessagePayload;
use crate::error::ButtonsError;
use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::id::ChannelId;

/// Interface for issuing "create message" requests
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Post a message to a channel
    ///
    /// # Arguments
    ///
    /// * `channel_id` - The channel to post into
    /// * `payload` - The request body
    ///
    /// # Returns
    ///
    /// The created message as returned by Discord
    async fn create_message(
        &self,
        channel_id: ChannelId,
        payload: &MessagePayload,
    ) -> Result<Message, ButtonsError>;
}
