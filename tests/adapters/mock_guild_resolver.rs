use discord_buttons::adapters::{GuildResolver, GuildSummary};
use serenity::async_trait;
use serenity::model::id::GuildId;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Mock implementation of GuildResolver for testing
pub struct MockGuildResolver {
    guilds: Mutex<HashMap<GuildId, String>>,
    fail: bool,
    calls: AtomicUsize,
}

impl MockGuildResolver {
    pub fn new() -> Self {
        Self {
            guilds: Mutex::new(HashMap::new()),
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Resolver whose every lookup fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn add_guild(&self, guild_id: u64, name: &str) {
        self.guilds
            .lock()
            .unwrap()
            .insert(GuildId::new(guild_id), name.to_string());
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockGuildResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GuildResolver for MockGuildResolver {
    async fn resolve_guild(&self, guild_id: GuildId) -> Result<Option<GuildSummary>, serenity::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(serenity::Error::Other("guild lookup failed"));
        }

        Ok(self
            .guilds
            .lock()
            .unwrap()
            .get(&guild_id)
            .map(|name| GuildSummary {
                id: guild_id,
                name: name.clone(),
            }))
    }
}
