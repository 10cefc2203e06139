use crate::bridge::button::{Button, ButtonRow, layout_rows};
use crate::bridge::discord_text::truncate_content;
use crate::bridge::embed_payload::EmbedPayload;
use crate::error::ButtonsError;
use serde::Serialize;
use serenity::model::channel::Message;
use serenity::model::id::{AttachmentId, ChannelId, MessageId, RoleId, UserId};

/// Body of a "create message" request
///
/// Built by [`MessageBuilder::build`]. Only fields that were explicitly
/// supplied appear in the JSON, so Discord applies its own defaults for
/// everything else.
///
/// JSON structure (all keys optional):
/// ```json
/// {
///   "content": "...",
///   "tts": true,
///   "nonce": "...",
///   "embeds": [ { "type": "rich", ... } ],
///   "attachments": [ { "id": "...", "filename": "..." } ],
///   "allowed_mentions": { "parse": [], "replied_user": false },
///   "message_reference": { "message_id": "..." },
///   "components": [ { "type": 1, "components": [ ... ] } ]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct MessagePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub tts: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<EmbedPayload>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<AttachmentPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<AllowedMentions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_reference: Option<MessageReferencePayload>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<ButtonRow>,
}

/// Message a reply points at
///
/// Either a bare identifier or a message handle; both serialize to a
/// `message_reference` object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyTo {
    Id(MessageId),
    Message {
        id: MessageId,
        channel_id: ChannelId,
    },
}

impl ReplyTo {
    pub fn id(id: impl Into<MessageId>) -> Self {
        Self::Id(id.into())
    }

    pub fn message(message: &Message) -> Self {
        Self::Message {
            id: message.id,
            channel_id: message.channel_id,
        }
    }

    pub fn message_id(&self) -> MessageId {
        match self {
            Self::Id(id) | Self::Message { id, .. } => *id,
        }
    }
}

impl From<MessageId> for ReplyTo {
    fn from(id: MessageId) -> Self {
        Self::Id(id)
    }
}

impl From<&Message> for ReplyTo {
    fn from(message: &Message) -> Self {
        Self::message(message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageReferencePayload {
    pub message_id: MessageId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<ChannelId>,
}

impl From<&ReplyTo> for MessageReferencePayload {
    fn from(reply_to: &ReplyTo) -> Self {
        match reply_to {
            ReplyTo::Id(id) => Self {
                message_id: *id,
                channel_id: None,
            },
            ReplyTo::Message { id, channel_id } => Self {
                message_id: *id,
                channel_id: Some(*channel_id),
            },
        }
    }
}

/// Mention categories Discord may parse out of the content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MentionParse {
    Users,
    Roles,
    Everyone,
}

/// Allowed-mentions policy
///
/// An empty `parse` list suppresses every mention not listed explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AllowedMentions {
    parse: Vec<MentionParse>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    users: Vec<UserId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    roles: Vec<RoleId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    replied_user: Option<bool>,
}

impl AllowedMentions {
    /// Suppress all mentions
    pub fn none() -> Self {
        Self::default()
    }

    /// Allow every mention category (Discord's behaviour without a policy)
    pub fn all() -> Self {
        Self {
            parse: vec![MentionParse::Users, MentionParse::Roles, MentionParse::Everyone],
            ..Self::default()
        }
    }

    pub fn parse(mut self, kind: MentionParse) -> Self {
        if !self.parse.contains(&kind) {
            self.parse.push(kind);
        }
        self
    }

    pub fn user(mut self, user_id: UserId) -> Self {
        self.users.push(user_id);
        self
    }

    pub fn role(mut self, role_id: RoleId) -> Self {
        self.roles.push(role_id);
        self
    }

    /// Whether the author of the replied-to message gets pinged
    pub fn replied_user(mut self, mention: bool) -> Self {
        self.replied_user = Some(mention);
        self
    }
}

/// Reference to an attachment already known to Discord
///
/// Used to keep or describe existing attachments. Multipart uploads are
/// not handled here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttachmentPayload {
    pub id: AttachmentId,
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Builder for a message carrying buttons
///
/// ```
/// use discord_buttons::bridge::button::Button;
/// use discord_buttons::bridge::message_payload::MessageBuilder;
///
/// let payload = MessageBuilder::new()
///     .content("Continue?")
///     .button(Button::new("Yes", "confirm_yes"))
///     .button(Button::new("No", "confirm_no"))
///     .build()
///     .unwrap();
/// assert_eq!(payload.components.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageBuilder {
    content: Option<String>,
    tts: bool,
    nonce: Option<String>,
    embeds: Vec<EmbedPayload>,
    attachments: Vec<AttachmentPayload>,
    allowed_mentions: Option<AllowedMentions>,
    mention_author: Option<bool>,
    reply_to: Option<ReplyTo>,
    buttons: Vec<Button>,
}

impl MessageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Send as text-to-speech (`tts` is only emitted when `true`)
    pub fn tts(mut self, tts: bool) -> Self {
        self.tts = tts;
        self
    }

    pub fn nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    pub fn embed(mut self, embed: EmbedPayload) -> Self {
        self.embeds.push(embed);
        self
    }

    pub fn attachment(mut self, attachment: AttachmentPayload) -> Self {
        self.attachments.push(attachment);
        self
    }

    pub fn allowed_mentions(mut self, allowed_mentions: AllowedMentions) -> Self {
        self.allowed_mentions = Some(allowed_mentions);
        self
    }

    /// Whether a reply pings the author of the referenced message
    pub fn mention_author(mut self, mention: bool) -> Self {
        self.mention_author = Some(mention);
        self
    }

    pub fn reply_to(mut self, reply_to: impl Into<ReplyTo>) -> Self {
        self.reply_to = Some(reply_to.into());
        self
    }

    pub fn button(mut self, button: Button) -> Self {
        self.buttons.push(button);
        self
    }

    pub fn buttons(mut self, buttons: impl IntoIterator<Item = Button>) -> Self {
        self.buttons.extend(buttons);
        self
    }

    /// Assemble the request body
    ///
    /// Fails with [`ButtonsError::RowCapacityExceeded`] when the button
    /// layout produces a row with more than five buttons.
    pub fn build(self) -> Result<MessagePayload, ButtonsError> {
        let components = layout_rows(&self.buttons)?;

        let allowed_mentions = match (self.allowed_mentions, self.mention_author) {
            (Some(policy), Some(mention)) => Some(policy.replied_user(mention)),
            (Some(policy), None) => Some(policy),
            (None, Some(mention)) => Some(AllowedMentions::all().replied_user(mention)),
            (None, None) => None,
        };

        Ok(MessagePayload {
            content: self.content.as_deref().map(truncate_content),
            tts: self.tts,
            nonce: self.nonce,
            embeds: self.embeds,
            attachments: self.attachments,
            allowed_mentions,
            message_reference: self.reply_to.as_ref().map(MessageReferencePayload::from),
            components,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn to_json(builder: MessageBuilder) -> serde_json::Value {
        serde_json::to_value(builder.build().unwrap()).unwrap()
    }

    #[test]
    fn test_empty_builder_yields_empty_object() {
        assert_eq!(to_json(MessageBuilder::new()), json!({}));
    }

    #[test]
    fn test_content_only() {
        assert_eq!(
            to_json(MessageBuilder::new().content("Hello")),
            json!({"content": "Hello"})
        );
    }

    #[rstest]
    #[case::enabled(true, Some(true))]
    #[case::disabled(false, None)]
    fn test_tts_only_emitted_when_true(#[case] tts: bool, #[case] expected: Option<bool>) {
        let value = to_json(MessageBuilder::new().content("hi").tts(tts));
        assert_eq!(value.get("tts").and_then(|v| v.as_bool()), expected);
    }

    #[test]
    fn test_long_content_is_truncated() {
        let payload = MessageBuilder::new()
            .content("x".repeat(2500))
            .build()
            .unwrap();

        assert_eq!(payload.content.unwrap().chars().count(), 2000);
    }

    #[rstest]
    #[case::bare_id(ReplyTo::id(MessageId::new(42)), json!({"message_id": "42"}))]
    #[case::message_handle(
        ReplyTo::Message { id: MessageId::new(42), channel_id: ChannelId::new(7) },
        json!({"message_id": "42", "channel_id": "7"})
    )]
    fn test_reply_reference_normalized(#[case] reply_to: ReplyTo, #[case] expected: serde_json::Value) {
        let value = to_json(MessageBuilder::new().reply_to(reply_to));
        assert_eq!(value["message_reference"], expected);
    }

    #[test]
    fn test_reply_to_message_handle() {
        let mut message = Message::default();
        message.id = MessageId::new(100);
        message.channel_id = ChannelId::new(200);

        let reply_to = ReplyTo::from(&message);
        assert_eq!(reply_to.message_id(), MessageId::new(100));
        assert_eq!(
            reply_to,
            ReplyTo::Message {
                id: MessageId::new(100),
                channel_id: ChannelId::new(200)
            }
        );
    }

    #[test]
    fn test_allowed_mentions_only_when_supplied() {
        let without = to_json(MessageBuilder::new().content("hi"));
        assert!(without.get("allowed_mentions").is_none());

        let with = to_json(
            MessageBuilder::new()
                .content("hi")
                .allowed_mentions(AllowedMentions::none().user(UserId::new(5))),
        );
        assert_eq!(with["allowed_mentions"], json!({"parse": [], "users": ["5"]}));
    }

    #[test]
    fn test_mention_author_without_policy_keeps_default_parsing() {
        let value = to_json(
            MessageBuilder::new()
                .reply_to(MessageId::new(1))
                .mention_author(false),
        );

        assert_eq!(
            value["allowed_mentions"],
            json!({"parse": ["users", "roles", "everyone"], "replied_user": false})
        );
    }

    #[test]
    fn test_mention_author_merges_into_policy() {
        let value = to_json(
            MessageBuilder::new()
                .allowed_mentions(AllowedMentions::none().parse(MentionParse::Roles))
                .mention_author(true),
        );

        assert_eq!(
            value["allowed_mentions"],
            json!({"parse": ["roles"], "replied_user": true})
        );
    }

    #[test]
    fn test_embed_nested_under_embeds() {
        let value = to_json(MessageBuilder::new().embed(EmbedPayload::new().title("T")));
        assert_eq!(value, json!({"embeds": [{"type": "rich", "title": "T"}]}));
    }

    #[test]
    fn test_attachments_and_nonce() {
        let value = to_json(
            MessageBuilder::new().nonce("abc").attachment(AttachmentPayload {
                id: AttachmentId::new(9),
                filename: "report.txt".to_string(),
                description: None,
            }),
        );

        assert_eq!(
            value,
            json!({"nonce": "abc", "attachments": [{"id": "9", "filename": "report.txt"}]})
        );
    }

    #[test]
    fn test_buttons_become_components() {
        let value = to_json(
            MessageBuilder::new()
                .content("Vote")
                .button(Button::new("Yes", "yes"))
                .button(Button::new("No", "no"))
                .button(Button::new("Results", "results").inline(false)),
        );

        let rows = value["components"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["type"], 1);
        assert_eq!(rows[0]["components"][0]["custom_id"], "yes");
        assert_eq!(rows[0]["components"][1]["custom_id"], "no");
        assert_eq!(rows[1]["components"][0]["custom_id"], "results");
    }

    #[test]
    fn test_overfull_row_fails_build() {
        let result = MessageBuilder::new()
            .buttons((0..6).map(|i| Button::new(i.to_string(), format!("b{i}"))))
            .build();

        assert!(matches!(
            result,
            Err(ButtonsError::RowCapacityExceeded { count: 6, .. })
        ));
    }
}
