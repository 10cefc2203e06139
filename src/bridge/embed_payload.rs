use serde::Serialize;
use serenity::model::channel::Embed;

/// Rich embed attached to an outgoing message
///
/// Every field is optional and omitted from JSON unless set to a
/// non-empty value. The `type` key is always `"rich"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedPayload {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    /// ISO8601 timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    footer: Option<EmbedFooter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<EmbedMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thumbnail: Option<EmbedMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    video: Option<EmbedMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    provider: Option<EmbedProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<EmbedAuthor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<EmbedField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedFooter {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// Image, thumbnail or video reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedMedia {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedProvider {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedAuthor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub inline: bool,
}

fn non_empty(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    (!value.is_empty()).then_some(value)
}

impl Default for EmbedPayload {
    fn default() -> Self {
        Self {
            kind: "rich",
            title: None,
            description: None,
            url: None,
            timestamp: None,
            color: None,
            footer: None,
            image: None,
            thumbnail: None,
            video: None,
            provider: None,
            author: None,
            fields: Vec::new(),
        }
    }
}

impl EmbedPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = non_empty(title);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = non_empty(description);
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = non_empty(url);
        self
    }

    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = non_empty(timestamp);
        self
    }

    /// Set the sidebar colour (`0` clears it)
    pub fn color(mut self, color: u32) -> Self {
        self.color = (color != 0).then_some(color);
        self
    }

    pub fn footer(mut self, text: impl Into<String>, icon_url: Option<String>) -> Self {
        self.footer = non_empty(text).map(|text| EmbedFooter { text, icon_url });
        self
    }

    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image = non_empty(url).map(EmbedMedia::from_url);
        self
    }

    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = non_empty(url).map(EmbedMedia::from_url);
        self
    }

    pub fn video(mut self, url: impl Into<String>) -> Self {
        self.video = non_empty(url).map(EmbedMedia::from_url);
        self
    }

    /// Set the provider, omitted when neither name nor url is non-empty
    pub fn provider(mut self, name: Option<String>, url: Option<String>) -> Self {
        let name = name.and_then(non_empty);
        let url = url.and_then(non_empty);
        self.provider = (name.is_some() || url.is_some()).then_some(EmbedProvider { name, url });
        self
    }

    pub fn author(mut self, name: impl Into<String>, url: Option<String>) -> Self {
        self.author = non_empty(name).map(|name| EmbedAuthor {
            name,
            url,
            icon_url: None,
        });
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }
}

impl EmbedMedia {
    fn from_url(url: String) -> Self {
        Self {
            url,
            height: None,
            width: None,
        }
    }
}

/// Convert a serenity embed (e.g. one read from an existing message)
///
/// Proxy URLs are dropped since Discord only accepts them on output.
impl From<&Embed> for EmbedPayload {
    fn from(embed: &Embed) -> Self {
        let media = |url: &str, height: Option<u32>, width: Option<u32>| {
            non_empty(url).map(|url| EmbedMedia { url, height, width })
        };

        Self {
            kind: "rich",
            title: embed.title.clone().and_then(non_empty),
            description: embed.description.clone().and_then(non_empty),
            url: embed.url.clone().and_then(non_empty),
            timestamp: embed.timestamp.as_ref().map(|ts| ts.to_string()),
            color: embed.colour.as_ref().map(|colour| colour.0).filter(|c| *c != 0),
            footer: embed.footer.as_ref().and_then(|f| {
                non_empty(f.text.clone()).map(|text| EmbedFooter {
                    text,
                    icon_url: f.icon_url.clone(),
                })
            }),
            image: embed
                .image
                .as_ref()
                .and_then(|i| media(&i.url, i.height, i.width)),
            thumbnail: embed
                .thumbnail
                .as_ref()
                .and_then(|t| media(&t.url, t.height, t.width)),
            video: embed
                .video
                .as_ref()
                .and_then(|v| media(&v.url, v.height, v.width)),
            provider: embed
                .provider
                .as_ref()
                .filter(|p| p.name.is_some() || p.url.is_some())
                .map(|p| EmbedProvider {
                    name: p.name.clone(),
                    url: p.url.clone(),
                }),
            author: embed.author.as_ref().and_then(|a| {
                non_empty(a.name.clone()).map(|name| EmbedAuthor {
                    name,
                    url: a.url.clone(),
                    icon_url: a.icon_url.clone(),
                })
            }),
            fields: embed
                .fields
                .iter()
                .map(|f| EmbedField {
                    name: f.name.clone(),
                    value: f.value.clone(),
                    inline: f.inline,
                })
                .collect(),
        }
    }
}
