pub mod button;
pub mod button_event_handler;
pub mod discord_text;
pub mod embed_payload;
pub mod inbound_event;
pub mod interaction_router;
pub mod message_payload;
pub mod messenger;
pub mod pressed_button;
