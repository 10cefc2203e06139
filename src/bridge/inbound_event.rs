use crate::bridge::pressed_button::PressedButton;
use crate::error::ButtonsError;
use serde::de::Error as _;
use serenity::model::application::Interaction;
use serenity::model::event::Event;

/// Gateway dispatch name of interaction events
pub const INTERACTION_CREATE: &str = "INTERACTION_CREATE";

/// Interaction subtype carried in the `type` field of an interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    Ping,
    ApplicationCommand,
    MessageComponent,
    Autocomplete,
    ModalSubmit,
    Unknown(u8),
}

impl From<u8> for InteractionKind {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Ping,
            2 => Self::ApplicationCommand,
            3 => Self::MessageComponent,
            4 => Self::Autocomplete,
            5 => Self::ModalSubmit,
            other => Self::Unknown(other),
        }
    }
}

/// Classification of an inbound gateway event
#[derive(Debug, Clone)]
pub enum InboundEvent {
    /// A message component was used (`INTERACTION_CREATE`, type 3)
    ComponentPress(Box<PressedButton>),
    /// Any other interaction (slash command, autocomplete, modal, ...)
    Interaction(InteractionKind),
    /// Not an interaction at all
    Other,
}

impl InboundEvent {
    /// Classify a raw gateway dispatch (`t` name plus `d` payload)
    ///
    /// Only component interactions are decoded in full. A component
    /// interaction whose payload is malformed yields a decode error.
    pub fn from_dispatch(name: &str, data: &serde_json::Value) -> Result<Self, ButtonsError> {
        if name != INTERACTION_CREATE {
            return Ok(Self::Other);
        }

        let kind = data
            .get("type")
            .and_then(serde_json::Value::as_u64)
            .ok_or_else(|| serde_json::Error::missing_field("type"))?;
        let kind = u8::try_from(kind).map_or(InteractionKind::Unknown(u8::MAX), InteractionKind::from);

        match kind {
            InteractionKind::MessageComponent => {
                let press = PressedButton::from_interaction_json(data)?;
                Ok(Self::ComponentPress(Box::new(press)))
            }
            other => Ok(Self::Interaction(other)),
        }
    }

    pub fn is_component_press(&self) -> bool {
        matches!(self, Self::ComponentPress(_))
    }
}

impl From<&Event> for InboundEvent {
    fn from(event: &Event) -> Self {
        let Event::InteractionCreate(create) = event else {
            return Self::Other;
        };

        match &create.interaction {
            Interaction::Component(component) => {
                Self::ComponentPress(Box::new(PressedButton::from(component)))
            }
            Interaction::Ping(_) => Self::Interaction(InteractionKind::Ping),
            Interaction::Command(_) => Self::Interaction(InteractionKind::ApplicationCommand),
            Interaction::Autocomplete(_) => Self::Interaction(InteractionKind::Autocomplete),
            Interaction::Modal(_) => Self::Interaction(InteractionKind::ModalSubmit),
            _ => Self::Interaction(InteractionKind::Unknown(0)),
        }
    }
}
