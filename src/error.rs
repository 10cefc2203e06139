use reqwest::StatusCode;
use serenity::model::channel::ChannelType;
use serenity::model::id::ChannelId;
use thiserror::Error;

/// Errors produced while building, sending or routing button messages
#[derive(Debug, Error)]
pub enum ButtonsError {
    /// A button row holds more buttons than Discord renders in one action row
    #[error("Limit exceeded: row {row} has {count} buttons (max. {max} buttons in a row)")]
    RowCapacityExceeded { row: usize, count: usize, max: usize },

    /// The send target cannot receive messages
    #[error("Invalid target: channel {channel_id} ({kind:?}) cannot receive messages")]
    InvalidTarget {
        channel_id: ChannelId,
        kind: Option<ChannelType>,
    },

    /// The platform answered with a non-success status
    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: StatusCode, body: String },

    /// An inbound or response payload could not be decoded
    #[error("Failed to decode payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// The HTTP round trip itself failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// An API path could not be joined onto the base URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
