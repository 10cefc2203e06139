//! Button message components for serenity bots
//!
//! - [`bridge::message_payload::MessageBuilder`] builds "create message"
//!   bodies with embeds, replies and rows of buttons
//! - [`bridge::interaction_router::InteractionRouter`] turns component
//!   interactions into `button_press` events for a
//!   [`adapters::ButtonPressListener`]
//! - [`bridge::messenger::ButtonMessenger`] sends built messages through a
//!   [`adapters::MessageSender`]

pub mod adapters;
pub mod bridge;
pub mod error;
pub mod params;

pub use error::ButtonsError;
