use super::message_sender::MessageSender;
use crate::bridge::message_payload::MessagePayload;
use crate::error::ButtonsError;
use crate::params::mask_token;
use anyhow::Context as _;
use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::id::ChannelId;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Default Discord REST API base URL
pub const DEFAULT_API_BASE_URL: &str = "https://discord.com/api/v10";

/// HTTP client settings
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// If true, accept invalid TLS certificates
    pub insecure_mode: bool,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            insecure_mode: false,
        }
    }
}

/// Authenticated client for the Discord REST API
///
/// Every request carries an `Authorization: Bot <token>` header.
/// Requests are not retried.
pub struct DiscordRestClient {
    client: reqwest::Client,
    base_url: Url,
    token: String,
}

impl DiscordRestClient {
    /// Create a new DiscordRestClient
    ///
    /// # Arguments
    ///
    /// * `base_url` - Versioned API base URL (e.g. `https://discord.com/api/v10`)
    /// * `token` - Bot token, without the `Bot ` prefix
    /// * `options` - Timeouts and TLS settings
    pub fn new(mut base_url: Url, token: String, options: &HttpOptions) -> anyhow::Result<Self> {
        let client = reqwest::ClientBuilder::new()
            .timeout(options.timeout)
            .connect_timeout(options.connect_timeout)
            .danger_accept_invalid_certs(options.insecure_mode)
            .build()
            .context("Building HTTP Client")?;

        // Url::join drops the last segment unless the base ends with a slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an API path (e.g. `channels/1/messages`) against the base URL
    pub fn endpoint(&self, path: &str) -> Result<Url, ButtonsError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    fn authorization(&self) -> String {
        format!("Bot {}", self.token)
    }

    /// Send a GET request to an API path
    pub async fn get(&self, path: &str) -> Result<reqwest::Response, ButtonsError> {
        let url = self.endpoint(path)?;
        debug!(%url, "GET");

        Ok(self
            .client
            .get(url)
            .header(AUTHORIZATION, self.authorization())
            .send()
            .await?)
    }

    /// Send a DELETE request to an API path
    pub async fn delete(&self, path: &str) -> Result<reqwest::Response, ButtonsError> {
        let url = self.endpoint(path)?;
        debug!(%url, "DELETE");

        Ok(self
            .client
            .delete(url)
            .header(AUTHORIZATION, self.authorization())
            .send()
            .await?)
    }

    /// Send a POST request with a JSON body to an API path
    pub async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<reqwest::Response, ButtonsError> {
        let url = self.endpoint(path)?;
        debug!(%url, "POST");

        Ok(self
            .client
            .post(url)
            .header(AUTHORIZATION, self.authorization())
            .json(body)
            .send()
            .await?)
    }
}

impl std::fmt::Debug for DiscordRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordRestClient")
            .field("base_url", &self.base_url.as_str())
            .field("token", &mask_token(&self.token))
            .finish()
    }
}

#[async_trait]
impl MessageSender for DiscordRestClient {
    async fn create_message(
        &self,
        channel_id: ChannelId,
        payload: &MessagePayload,
    ) -> Result<Message, ButtonsError> {
        let response = self
            .post(&format!("channels/{channel_id}/messages"), payload)
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(
                %status,
                channel_id = %channel_id,
                %body,
                "Discord rejected create message request"
            );
            return Err(ButtonsError::RequestFailed { status, body });
        }

        Ok(serde_json::from_str::<Message>(&body)?)
    }
}
