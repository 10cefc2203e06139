use crate::adapters::{ButtonPressListener, GuildResolver, GuildSummary};
use crate::bridge::inbound_event::InboundEvent;
use anyhow::Context as _;
use serenity::model::event::Event;
use serenity::model::id::GuildId;
use std::sync::Arc;
use tracing::{debug, info};

/// Event name under which button presses are re-dispatched
pub const BUTTON_PRESS_EVENT: &str = "button_press";

/// Route inbound gateway events to button press listeners
pub struct InteractionRouter<G, L>
where
    G: GuildResolver,
    L: ButtonPressListener,
{
    guild_resolver: Arc<G>,
    listener: Arc<L>,
}

impl<G, L> InteractionRouter<G, L>
where
    G: GuildResolver,
    L: ButtonPressListener,
{
    /// Create a new InteractionRouter
    ///
    /// # Arguments
    ///
    /// * `guild_resolver` - Lookup for the guild a press originated from
    /// * `listener` - Receiver of `button_press` events
    pub fn new(guild_resolver: Arc<G>, listener: Arc<L>) -> Self {
        Self {
            guild_resolver,
            listener,
        }
    }

    /// Route a classified event
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - A `button_press` event was dispatched
    /// * `Ok(false)` - The event was not a component interaction
    /// * `Err(_)` - The listener failed for this event
    pub async fn route(&self, event: InboundEvent) -> anyhow::Result<bool> {
        let mut press = match event {
            InboundEvent::ComponentPress(press) => *press,
            InboundEvent::Interaction(kind) => {
                debug!(?kind, "Ignoring non-component interaction");
                return Ok(false);
            }
            InboundEvent::Other => return Ok(false),
        };

        if let Some(guild_id) = press.guild_id {
            press.guild = self.resolve_guild(guild_id).await;
        }

        debug!(
            custom_id = %press.custom_id,
            user = %press.user.name,
            message_id = %press.message.id,
            "Processing button press"
        );

        self.listener
            .on_button_press(&press)
            .await
            .with_context(|| format!("Listener failed to handle {BUTTON_PRESS_EVENT} event"))?;

        info!(
            event = BUTTON_PRESS_EVENT,
            custom_id = %press.custom_id,
            user_id = %press.user.id,
            channel_id = %press.channel_id,
            guild = ?press.guild.as_ref().map(|g| g.name.as_str()),
            "Dispatched button press"
        );

        Ok(true)
    }

    /// Decode and route a raw gateway dispatch (`t` name plus `d` payload)
    ///
    /// A malformed interaction payload fails this event only.
    pub async fn route_dispatch(
        &self,
        name: &str,
        data: &serde_json::Value,
    ) -> anyhow::Result<bool> {
        let event = InboundEvent::from_dispatch(name, data)
            .with_context(|| format!("Failed to decode {name} payload"))?;

        self.route(event).await
    }

    /// Classify and route a typed serenity gateway event
    pub async fn route_event(&self, event: &Event) -> anyhow::Result<bool> {
        self.route(InboundEvent::from(event)).await
    }

    /// Missing guild context is not fatal: the press is dispatched without it
    async fn resolve_guild(&self, guild_id: GuildId) -> Option<GuildSummary> {
        match self.guild_resolver.resolve_guild(guild_id).await {
            Ok(Some(guild)) => Some(guild),
            Ok(None) => {
                debug!(guild_id = %guild_id, "Guild not found");
                None
            }
            Err(err) => {
                debug!(guild_id = %guild_id, ?err, "Failed to resolve guild");
                None
            }
        }
    }
}
