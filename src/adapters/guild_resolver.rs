use serenity::async_trait;
use serenity::model::id::GuildId;

/// Minimal guild context attached to a button press
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildSummary {
    pub id: GuildId,
    pub name: String,
}

/// Interface for resolving the guild an interaction originated from
#[async_trait]
pub trait GuildResolver: Send + Sync {
    /// Look up a guild
    ///
    /// # Returns
    ///
    /// * `Ok(Some(_))` - The guild is known
    /// * `Ok(None)` - The guild could not be found
    /// * `Err(_)` - The lookup itself failed
    async fn resolve_guild(&self, guild_id: GuildId) -> Result<Option<GuildSummary>, serenity::Error>;
}
