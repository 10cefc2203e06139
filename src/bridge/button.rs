use crate::error::ButtonsError;
use serde::Serialize;
use serde::ser::Serializer;

/// Maximum number of buttons Discord renders in a single action row
pub const MAX_ROW_BUTTONS: usize = 5;

/// Component type tag of an action row
const ACTION_ROW_TYPE: u8 = 1;

/// Component type tag of a button
const BUTTON_TYPE: u8 = 2;

/// Visual style of a button
///
/// Serializes to the integer values used by the Discord API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonStyle {
    #[default]
    Primary,
    Secondary,
    Success,
    Danger,
    Link,
}

impl ButtonStyle {
    pub fn value(self) -> u8 {
        match self {
            ButtonStyle::Primary => 1,
            ButtonStyle::Secondary => 2,
            ButtonStyle::Success => 3,
            ButtonStyle::Danger => 4,
            ButtonStyle::Link => 5,
        }
    }
}

impl Serialize for ButtonStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.value())
    }
}

/// What a button does when pressed
#[derive(Debug, Clone, PartialEq, Eq)]
enum ButtonAction {
    /// Send an interaction carrying this identifier back to the bot
    CustomId(String),
    /// Open this URL in the user's browser (no interaction is sent)
    Url(String),
}

/// A single button attached to a message
///
/// Buttons are `inline` by default: consecutive inline buttons share a row.
/// A button with `inline(false)` always gets a row of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    label: String,
    style: ButtonStyle,
    action: ButtonAction,
    emoji: Option<String>,
    disabled: bool,
    inline: bool,
}

impl Button {
    /// Create a primary button that reports `custom_id` when pressed
    pub fn new(label: impl Into<String>, custom_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: ButtonStyle::Primary,
            action: ButtonAction::CustomId(custom_id.into()),
            emoji: None,
            disabled: false,
            inline: true,
        }
    }

    /// Create a link button opening `url`
    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: ButtonStyle::Link,
            action: ButtonAction::Url(url.into()),
            emoji: None,
            disabled: false,
            inline: true,
        }
    }

    /// Set the style of an interactive button
    ///
    /// Link buttons keep the link style; `ButtonStyle::Link` on an
    /// interactive button falls back to secondary.
    pub fn style(mut self, style: ButtonStyle) -> Self {
        if matches!(self.action, ButtonAction::CustomId(_)) {
            self.style = match style {
                ButtonStyle::Link => ButtonStyle::Secondary,
                other => other,
            };
        }
        self
    }

    /// Set a unicode emoji shown next to the label
    pub fn emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Control row placement
    pub fn inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Identifier echoed back in the interaction, `None` for link buttons
    pub fn custom_id(&self) -> Option<&str> {
        match &self.action {
            ButtonAction::CustomId(id) => Some(id),
            ButtonAction::Url(_) => None,
        }
    }

    pub fn is_inline(&self) -> bool {
        self.inline
    }

    fn to_component(&self) -> ButtonComponent<'_> {
        let (custom_id, url) = match &self.action {
            ButtonAction::CustomId(id) => (Some(id.as_str()), None),
            ButtonAction::Url(url) => (None, Some(url.as_str())),
        };

        ButtonComponent {
            kind: BUTTON_TYPE,
            style: self.style,
            label: &self.label,
            custom_id,
            url,
            emoji: self.emoji.as_deref().map(|name| ComponentEmoji { name }),
            disabled: self.disabled,
        }
    }
}

/// Wire form of a button
#[derive(Debug, Serialize)]
struct ButtonComponent<'a> {
    #[serde(rename = "type")]
    kind: u8,
    style: ButtonStyle,
    label: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    emoji: Option<ComponentEmoji<'a>>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    disabled: bool,
}

#[derive(Debug, Serialize)]
struct ComponentEmoji<'a> {
    name: &'a str,
}

/// An action row: the structural wrapper around up to five buttons
///
/// JSON structure:
/// ```json
/// { "type": 1, "components": [ { "type": 2, ... } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonRow {
    buttons: Vec<Button>,
}

impl ButtonRow {
    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }
}

impl Serialize for ButtonRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct ActionRow<'a> {
            #[serde(rename = "type")]
            kind: u8,
            components: Vec<ButtonComponent<'a>>,
        }

        ActionRow {
            kind: ACTION_ROW_TYPE,
            components: self.buttons.iter().map(Button::to_component).collect(),
        }
        .serialize(serializer)
    }
}

/// Group buttons into action rows
///
/// Consecutive inline buttons share a row. A non-inline button closes the
/// current row and occupies a row of its own. Fails when any assembled row
/// holds more than [`MAX_ROW_BUTTONS`] buttons.
pub fn layout_rows(buttons: &[Button]) -> Result<Vec<ButtonRow>, ButtonsError> {
    let mut rows: Vec<ButtonRow> = Vec::new();
    let mut current: Vec<Button> = Vec::new();

    for button in buttons {
        if button.inline {
            current.push(button.clone());
        } else {
            if !current.is_empty() {
                rows.push(ButtonRow {
                    buttons: std::mem::take(&mut current),
                });
            }
            rows.push(ButtonRow {
                buttons: vec![button.clone()],
            });
        }
    }
    if !current.is_empty() {
        rows.push(ButtonRow { buttons: current });
    }

    if let Some((row, overfull)) = rows
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() > MAX_ROW_BUTTONS)
    {
        return Err(ButtonsError::RowCapacityExceeded {
            row,
            count: overfull.len(),
            max: MAX_ROW_BUTTONS,
        });
    }

    Ok(rows)
}
