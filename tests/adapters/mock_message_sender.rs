use discord_buttons::ButtonsError;
use discord_buttons::adapters::MessageSender;
use discord_buttons::bridge::message_payload::MessagePayload;
use reqwest::StatusCode;
use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::id::{ChannelId, MessageId};
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub struct SentMessage {
    pub channel_id: ChannelId,
    pub payload: serde_json::Value,
}

/// Records create message calls instead of hitting the network
pub struct MockMessageSender {
    sent: Mutex<Vec<SentMessage>>,
    reject_with: Option<(StatusCode, String)>,
}

impl MockMessageSender {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            reject_with: None,
        }
    }

    /// Sender that answers every call with a non-success status
    pub fn rejecting(status: StatusCode, body: &str) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            reject_with: Some((status, body.to_string())),
        }
    }

    pub fn get_sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for MockMessageSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageSender for MockMessageSender {
    async fn create_message(
        &self,
        channel_id: ChannelId,
        payload: &MessagePayload,
    ) -> Result<Message, ButtonsError> {
        self.sent.lock().unwrap().push(SentMessage {
            channel_id,
            payload: serde_json::to_value(payload)?,
        });

        if let Some((status, body)) = &self.reject_with {
            return Err(ButtonsError::RequestFailed {
                status: *status,
                body: body.clone(),
            });
        }

        let mut message = Message::default();
        message.id = MessageId::new(4242);
        message.channel_id = channel_id;
        message.content = payload.content.clone().unwrap_or_default();
        Ok(message)
    }
}
