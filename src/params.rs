use crate::adapters::{DEFAULT_API_BASE_URL, HttpOptions};
use anyhow::Context as _;
use serde::Deserialize;
use std::time::Duration;

/// Default Discord API base URL
fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

/// Default HTTP request timeout in seconds
fn default_http_timeout() -> u64 {
    30
}

/// Default HTTP connection timeout in seconds
fn default_http_connect_timeout() -> u64 {
    10
}

/// Default message that triggers the demo button message
fn default_demo_command() -> String {
    "!buttons".to_string()
}

#[derive(Deserialize, Clone)]
pub struct Params {
    #[serde(default)]
    pub insecure_mode: bool,
    pub discord_token: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    // HTTP Client Configuration
    #[serde(default = "default_http_timeout")]
    pub http_timeout: u64,
    #[serde(default = "default_http_connect_timeout")]
    pub http_connect_timeout: u64,

    // Demo bot
    #[serde(default = "default_demo_command")]
    pub demo_command: String,
}

/// Mask sensitive strings by showing only first and last few characters
pub(crate) fn mask_token(s: &str) -> String {
    const VISIBLE_CHARS: usize = 4;

    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= VISIBLE_CHARS * 2 {
        // If string is too short, mask everything except first char
        return match chars.first() {
            Some(first) => format!("{first}***"),
            None => "<empty>".to_string(),
        };
    }

    let head: String = chars[..VISIBLE_CHARS].iter().collect();
    let tail: String = chars[chars.len() - VISIBLE_CHARS..].iter().collect();
    format!("{head}***{tail}")
}

impl std::fmt::Debug for Params {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Params")
            .field("insecure_mode", &self.insecure_mode)
            .field("discord_token", &mask_token(&self.discord_token))
            .field("api_base_url", &self.api_base_url)
            .field("http_timeout", &self.http_timeout)
            .field("http_connect_timeout", &self.http_connect_timeout)
            .field("demo_command", &self.demo_command)
            .finish()
    }
}

impl Params {
    pub fn new() -> anyhow::Result<Params> {
        envy::from_env::<Params>().context("Failed to load configuration")
    }

    /// HTTP client settings for the REST client
    pub fn http_options(&self) -> HttpOptions {
        HttpOptions {
            timeout: Duration::from_secs(self.http_timeout),
            connect_timeout: Duration::from_secs(self.http_connect_timeout),
            insecure_mode: self.insecure_mode,
        }
    }
}
