//! Tagged part fragments attached to streamed messages.

use super::{FollowupPayload, SourcesPayload, StatusPayload, TickerPayload};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Prefix the transport puts in front of custom data part discriminators.
const DATA_PREFIX: &str = "data-";

/// Discriminator of a [`Part`], resolved from its raw `type` tag.
///
/// Both the bare kind (`"sources"`) and the transport's data-part form
/// (`"data-sources"`) resolve to the same variant. Anything else is kept as
/// [`PartKind::Unrecognized`] so newer transports never break the reader.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PartKind {
    /// Streamed answer or query text.
    Text,
    /// Citations together with optional news and image results.
    Sources,
    /// A stock ticker symbol, or an explicit clear.
    Ticker,
    /// Suggested follow-up questions.
    Followup,
    /// A human-readable progress line.
    Status,
    /// A discriminator this crate does not know about.
    Unrecognized(String),
}

impl PartKind {
    /// Resolves a raw discriminator.
    #[must_use]
    pub fn parse(discriminator: &str) -> Self {
        let bare = discriminator
            .strip_prefix(DATA_PREFIX)
            .unwrap_or(discriminator);
        match bare {
            "text" if bare.len() == discriminator.len() => Self::Text,
            "sources" => Self::Sources,
            "ticker" => Self::Ticker,
            "followup" => Self::Followup,
            "status" => Self::Status,
            _ => Self::Unrecognized(discriminator.to_owned()),
        }
    }

    /// Returns the bare kind name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Sources => "sources",
            Self::Ticker => "ticker",
            Self::Followup => "followup",
            Self::Status => "status",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Returns `true` for the four side-channel kinds the aggregator consumes.
    #[must_use]
    pub const fn is_side_channel(&self) -> bool {
        matches!(
            self,
            Self::Sources | Self::Ticker | Self::Followup | Self::Status
        )
    }
}

/// A single part of a streamed message.
///
/// The raw discriminator is preserved verbatim so that unknown parts survive
/// a decode/encode cycle untouched.
///
/// # Serialisation
///
/// ```json
/// { "type": "text", "text": "Apple shares rose..." }
/// { "type": "data-ticker", "data": { "symbol": "AAPL" } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(rename = "type")]
    discriminator: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    data: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl Part {
    /// Creates a text part.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            discriminator: "text".to_owned(),
            data: Value::Null,
            text: Some(text.into()),
        }
    }

    /// Creates a data part with an arbitrary discriminator and payload.
    #[must_use]
    pub fn data(discriminator: impl Into<String>, data: Value) -> Self {
        Self {
            discriminator: discriminator.into(),
            data,
            text: None,
        }
    }

    /// Creates a `data-sources` part.
    #[must_use]
    pub fn sources(payload: &SourcesPayload) -> Self {
        Self::data_of(&PartKind::Sources, json!(payload))
    }

    /// Creates a `data-ticker` part. `None` clears the ticker.
    #[must_use]
    pub fn ticker(symbol: Option<&str>) -> Self {
        Self::data_of(&PartKind::Ticker, json!(TickerPayload::new(symbol)))
    }

    /// Creates a `data-followup` part.
    #[must_use]
    pub fn followup<I, S>(questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::data_of(&PartKind::Followup, json!(FollowupPayload::new(questions)))
    }

    /// Creates a `data-status` part.
    #[must_use]
    pub fn status(message: impl Into<String>) -> Self {
        Self::data_of(&PartKind::Status, json!(StatusPayload::new(message)))
    }

    fn data_of(kind: &PartKind, data: Value) -> Self {
        Self::data(format!("{DATA_PREFIX}{}", kind.as_str()), data)
    }

    /// Returns the raw discriminator as delivered by the transport.
    #[must_use]
    pub fn discriminator(&self) -> &str {
        &self.discriminator
    }

    /// Returns the resolved kind.
    #[must_use]
    pub fn kind(&self) -> PartKind {
        PartKind::parse(&self.discriminator)
    }

    /// Returns the data payload, `Value::Null` when absent.
    #[must_use]
    pub const fn payload(&self) -> &Value {
        &self.data
    }

    /// Returns `true` when the part carries a non-null data payload.
    #[must_use]
    pub const fn has_payload(&self) -> bool {
        !matches!(self.data, Value::Null)
    }

    /// Returns the text content of a text part.
    #[must_use]
    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }
}
