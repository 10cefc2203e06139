use crate::bridge::pressed_button::PressedButton;
use anyhow::Context as _;
use serenity::async_trait;
use tokio::sync::mpsc::UnboundedSender;

/// Application-side subscriber of `button_press` events
#[async_trait]
pub trait ButtonPressListener: Send + Sync {
    /// Called once per decoded button press
    ///
    /// An error fails only the press being handled.
    async fn on_button_press(&self, press: &PressedButton) -> anyhow::Result<()>;
}

/// Forward presses into a channel, for consumers running their own loop
#[async_trait]
impl ButtonPressListener for UnboundedSender<PressedButton> {
    async fn on_button_press(&self, press: &PressedButton) -> anyhow::Result<()> {
        self.send(press.clone())
            .ok()
            .context("Button press receiver was dropped")
    }
}
