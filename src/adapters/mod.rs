// Trait definitions
pub mod button_press_listener;
pub mod guild_resolver;
pub mod message_sender;

// Implementations
pub mod discord_rest_client;
pub mod serenity_guild_resolver;

// Re-exports for convenience
pub use button_press_listener::ButtonPressListener;
pub use discord_rest_client::{DEFAULT_API_BASE_URL, DiscordRestClient, HttpOptions};
pub use guild_resolver::{GuildResolver, GuildSummary};
pub use message_sender::MessageSender;
pub use serenity_guild_resolver::SerenityGuildResolver;
