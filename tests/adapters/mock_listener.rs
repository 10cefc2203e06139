use discord_buttons::adapters::ButtonPressListener;
use discord_buttons::bridge::pressed_button::PressedButton;
use serenity::async_trait;
use std::sync::Mutex;

/// Records every button press it receives
pub struct MockListener {
    presses: Mutex<Vec<PressedButton>>,
    fail: bool,
}

impl MockListener {
    pub fn new() -> Self {
        Self {
            presses: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// Listener that records the press and then fails
    pub fn failing() -> Self {
        Self {
            presses: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn get_presses(&self) -> Vec<PressedButton> {
        self.presses.lock().unwrap().clone()
    }
}

impl Default for MockListener {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ButtonPressListener for MockListener {
    async fn on_button_press(&self, press: &PressedButton) -> anyhow::Result<()> {
        self.presses.lock().unwrap().push(press.clone());
        if self.fail {
            anyhow::bail!("listener failure");
        }
        Ok(())
    }
}
