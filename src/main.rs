use anyhow::Context as _;
use discord_buttons::adapters::{ButtonPressListener, DiscordRestClient};
use discord_buttons::bridge::button::{Button, ButtonStyle};
use discord_buttons::bridge::button_event_handler::ButtonEventHandler;
use discord_buttons::bridge::embed_payload::EmbedPayload;
use discord_buttons::bridge::message_payload::MessageBuilder;
use discord_buttons::bridge::messenger::ButtonMessenger;
use discord_buttons::bridge::pressed_button::PressedButton;
use discord_buttons::params::Params;
use std::sync::Arc;
use tracing::{error, info};

use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;

type Messenger = ButtonMessenger<DiscordRestClient>;

/// Sends the demo message when the demo command is posted
struct Handler {
    messenger: Arc<Messenger>,
    demo_command: String,
}

impl Handler {
    fn demo_message() -> MessageBuilder {
        MessageBuilder::new()
            .content("Pick a colour")
            .embed(
                EmbedPayload::new()
                    .title("Button demo")
                    .description("Inline buttons share a row, the last one sits alone")
                    .color(0x5865F2),
            )
            .button(Button::new("Red", "colour_red").style(ButtonStyle::Danger))
            .button(Button::new("Green", "colour_green").style(ButtonStyle::Success))
            .button(Button::new("Blue", "colour_blue"))
            .button(
                Button::new("Something else", "colour_other")
                    .style(ButtonStyle::Secondary)
                    .inline(false),
            )
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _: Context, ready: Ready) {
        info!(
            display_name = %ready.user.display_name(),
            user_id = %ready.user.id,
            "Bot is connected"
        );
    }

    async fn message(&self, ctx: Context, message: Message) {
        if message.author.bot || message.content.trim() != self.demo_command {
            return;
        }

        let channel = match message.channel(&ctx).await {
            Ok(channel) => channel,
            Err(err) => {
                error!(?err, channel_id = %message.channel_id, "Failed to resolve channel");
                return;
            }
        };

        let builder = Self::demo_message().reply_to(&message).mention_author(false);
        if let Err(err) = self.messenger.send(&channel, builder).await {
            error!(?err, "Failed to send demo message");
        }
    }
}

/// Answers every button press in the channel it came from
struct DemoListener {
    messenger: Arc<Messenger>,
}

#[async_trait]
impl ButtonPressListener for DemoListener {
    async fn on_button_press(&self, press: &PressedButton) -> anyhow::Result<()> {
        let content = format!("**{}** pressed `{}`", press.display_name(), press.custom_id);
        let builder = MessageBuilder::new()
            .content(content)
            .reply_to(&press.message)
            .mention_author(false);

        self.messenger
            .send_to(press.channel_id, builder)
            .await
            .context("Failed to answer button press")?;
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    // Default: discord_buttons=info, serenity=warn (suppress serenity's normal operation logs)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "discord_buttons=info,serenity=warn".into()),
        )
        .init();

    info!(
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        description = env!("CARGO_PKG_DESCRIPTION"),
        "Starting application"
    );

    let params = Params::new()?;
    info!(?params, "Application parameters loaded");

    let base_url = url::Url::parse(&params.api_base_url).context("Parsing API_BASE_URL")?;
    let rest_client = DiscordRestClient::new(
        base_url,
        params.discord_token.clone(),
        &params.http_options(),
    )?;
    let messenger = Arc::new(ButtonMessenger::new(Arc::new(rest_client)));

    let handler = Handler {
        messenger: messenger.clone(),
        demo_command: params.demo_command.clone(),
    };
    let buttons = ButtonEventHandler::new(Arc::new(DemoListener { messenger }));

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&params.discord_token, intents)
        .event_handler(handler)
        .raw_event_handler(buttons)
        .await
        .context("Creating Discord Client")?;

    client
        .start_autosharded()
        .await
        .context("Running Discord Client")
}
