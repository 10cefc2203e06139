use super::guild_resolver::{GuildResolver, GuildSummary};
use serenity::async_trait;
use serenity::cache::Cache;
use serenity::http::Http;
use serenity::model::id::GuildId;
use std::sync::Arc;
use tracing::debug;

/// Guild lookup via Serenity
///
/// Uses cache-first approach with API fallback.
pub struct SerenityGuildResolver {
    cache: Arc<Cache>,
    http: Arc<Http>,
}

impl SerenityGuildResolver {
    pub fn new(cache: Arc<Cache>, http: Arc<Http>) -> Self {
        Self { cache, http }
    }
}

#[async_trait]
impl GuildResolver for SerenityGuildResolver {
    async fn resolve_guild(&self, guild_id: GuildId) -> Result<Option<GuildSummary>, serenity::Error> {
        // Copy what we need out of the cache before any await point
        let cached = self.cache.guild(guild_id).map(|guild| GuildSummary {
            id: guild_id,
            name: guild.name.clone(),
        });

        if let Some(summary) = cached {
            debug!(guild_id = %guild_id, "Guild resolved from cache");
            return Ok(Some(summary));
        }

        debug!(guild_id = %guild_id, "Cache miss, fetching guild from API");

        let guild = self.http.get_guild(guild_id).await?;
        Ok(Some(GuildSummary {
            id: guild.id,
            name: guild.name,
        }))
    }
}
