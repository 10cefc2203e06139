// Mock implementations and fixtures for adapter layer testing

pub mod fixtures;
pub mod mock_guild_resolver;
pub mod mock_listener;
pub mod mock_message_sender;

pub use mock_guild_resolver::MockGuildResolver;
pub use mock_listener::MockListener;
pub use mock_message_sender::MockMessageSender;
