use crate::adapters::GuildSummary;
use crate::error::ButtonsError;
use serde::Deserialize;
use serde::de::Error as _;
use serenity::model::application::{ComponentInteraction, ComponentInteractionDataKind};
use serenity::model::channel::Message;
use serenity::model::id::{ChannelId, GuildId, InteractionId, RoleId};
use serenity::model::user::User;

/// A decoded button press
///
/// Handed to [`ButtonPressListener`](crate::adapters::ButtonPressListener)s
/// as the `button_press` event.
#[derive(Debug, Clone)]
pub struct PressedButton {
    pub interaction_id: InteractionId,
    /// Token for responding to the interaction
    pub interaction_token: String,
    /// Identifier of the pressed button (`custom_id`)
    pub custom_id: String,
    /// Discord component type (2 for buttons, 3..=8 for select menus)
    pub component_type: u8,
    pub guild_id: Option<GuildId>,
    /// Guild details, filled in by the router when resolvable
    pub guild: Option<GuildSummary>,
    pub channel_id: ChannelId,
    /// The user who pressed the button
    pub user: User,
    /// Guild member details (`None` in direct messages)
    pub member: Option<PressingMember>,
    /// The message carrying the button
    pub message: Message,
}

/// Guild-specific details of the acting member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PressingMember {
    pub nick: Option<String>,
    pub roles: Vec<RoleId>,
}

impl PressedButton {
    /// Name shown for the acting user (nickname, global name, then username)
    pub fn display_name(&self) -> &str {
        self.member
            .as_ref()
            .and_then(|m| m.nick.as_deref())
            .or(self.user.global_name.as_deref())
            .unwrap_or(&self.user.name)
    }

    /// Decode the `d` payload of a component `INTERACTION_CREATE` dispatch
    pub fn from_interaction_json(data: &serde_json::Value) -> Result<Self, ButtonsError> {
        let raw = RawComponentInteraction::deserialize(data)?;

        let (user, member) = match (raw.member, raw.user) {
            (Some(member), _) => (
                member.user,
                Some(PressingMember {
                    nick: member.nick,
                    roles: member.roles,
                }),
            ),
            (None, Some(user)) => (user, None),
            (None, None) => return Err(serde_json::Error::missing_field("user").into()),
        };

        Ok(Self {
            interaction_id: raw.id,
            interaction_token: raw.token,
            custom_id: raw.data.custom_id,
            component_type: raw.data.component_type,
            guild_id: raw.guild_id,
            guild: None,
            channel_id: raw.channel_id,
            user,
            member,
            message: raw.message,
        })
    }
}

impl From<&ComponentInteraction> for PressedButton {
    fn from(interaction: &ComponentInteraction) -> Self {
        let component_type = match &interaction.data.kind {
            ComponentInteractionDataKind::Button => 2,
            ComponentInteractionDataKind::StringSelect { .. } => 3,
            ComponentInteractionDataKind::UserSelect { .. } => 5,
            ComponentInteractionDataKind::RoleSelect { .. } => 6,
            ComponentInteractionDataKind::MentionableSelect { .. } => 7,
            ComponentInteractionDataKind::ChannelSelect { .. } => 8,
            ComponentInteractionDataKind::Unknown(kind) => *kind,
        };

        Self {
            interaction_id: interaction.id,
            interaction_token: interaction.token.clone(),
            custom_id: interaction.data.custom_id.clone(),
            component_type,
            guild_id: interaction.guild_id,
            guild: None,
            channel_id: interaction.channel_id,
            user: interaction.user.clone(),
            member: interaction.member.as_ref().map(|m| PressingMember {
                nick: m.nick.clone(),
                roles: m.roles.clone(),
            }),
            message: (*interaction.message).clone(),
        }
    }
}

#[derive(Deserialize)]
struct RawComponentInteraction {
    id: InteractionId,
    token: String,
    #[serde(default)]
    guild_id: Option<GuildId>,
    channel_id: ChannelId,
    #[serde(default)]
    member: Option<RawMember>,
    #[serde(default)]
    user: Option<User>,
    message: Message,
    data: RawComponentData,
}

#[derive(Deserialize)]
struct RawMember {
    user: User,
    #[serde(default)]
    nick: Option<String>,
    #[serde(default)]
    roles: Vec<RoleId>,
}

#[derive(Deserialize)]
struct RawComponentData {
    custom_id: String,
    component_type: u8,
}
