//! Typed payloads carried by side-channel parts.
//!
//! Decoding is lenient by construction: each payload is read field by field
//! from the part's JSON data, and a missing or malformed field is treated as
//! absent for that field only. Nothing in this module can fail.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A web search result cited by the answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Source {
    /// Canonical URL of the result.
    pub url: String,
    /// Page title.
    pub title: String,
    /// Short description or snippet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Favicon URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    /// Preview image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Display name of the publishing site.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    /// Scraped page body as markdown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    /// Scraped page body as plain text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Source {
    /// Creates a source with a URL and title.
    #[must_use]
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            ..Self::default()
        }
    }
}

/// A news article related to the query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewsItem {
    /// Article URL.
    pub url: String,
    /// Headline.
    pub title: String,
    /// Lead paragraph or snippet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    /// Publishing outlet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Publication date as delivered by the search backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Thumbnail URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl NewsItem {
    /// Creates a news item with a URL and headline.
    #[must_use]
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            ..Self::default()
        }
    }
}

/// An image result related to the query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageItem {
    /// Full-size image URL.
    pub url: String,
    /// Caption or alt text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Thumbnail URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Page the image was found on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Pixel width, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Pixel height, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl ImageItem {
    /// Creates an image result from its URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

/// Payload of a `sources` part.
///
/// `news_results` and `image_results` are optional on the wire; a payload
/// without them still replaces the news and image panels with empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourcesPayload {
    /// Cited search results.
    #[serde(default)]
    pub sources: Vec<Source>,
    /// News results, when the search produced any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub news_results: Option<Vec<NewsItem>>,
    /// Image results, when the search produced any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_results: Option<Vec<ImageItem>>,
}

impl SourcesPayload {
    /// Creates a payload carrying only sources.
    #[must_use]
    pub fn new(sources: impl IntoIterator<Item = Source>) -> Self {
        Self {
            sources: sources.into_iter().collect(),
            news_results: None,
            image_results: None,
        }
    }

    /// Attaches news results.
    #[must_use]
    pub fn with_news(mut self, news: impl IntoIterator<Item = NewsItem>) -> Self {
        self.news_results = Some(news.into_iter().collect());
        self
    }

    /// Attaches image results.
    #[must_use]
    pub fn with_images(mut self, images: impl IntoIterator<Item = ImageItem>) -> Self {
        self.image_results = Some(images.into_iter().collect());
        self
    }

    /// Reads a payload from raw part data, field by field.
    #[must_use]
    pub fn from_data(data: &Value) -> Self {
        Self {
            sources: lenient_field(data, "sources").unwrap_or_default(),
            news_results: lenient_field(data, "newsResults"),
            image_results: lenient_field(data, "imageResults"),
        }
    }
}

/// Payload of a `ticker` part. A `None` symbol clears the ticker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerPayload {
    /// Upper-case ticker symbol, or `None` to clear.
    #[serde(default)]
    pub symbol: Option<String>,
}

impl TickerPayload {
    /// Creates a ticker payload.
    #[must_use]
    pub fn new(symbol: Option<&str>) -> Self {
        Self {
            symbol: symbol.map(str::to_owned),
        }
    }

    /// Reads a payload from raw part data. A missing symbol reads as a clear.
    #[must_use]
    pub fn from_data(data: &Value) -> Self {
        Self {
            symbol: lenient_field(data, "symbol"),
        }
    }
}

/// Payload of a `followup` part.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowupPayload {
    /// Suggested follow-up questions, in display order.
    #[serde(default)]
    pub questions: Vec<String>,
}

impl FollowupPayload {
    /// Creates a follow-up payload.
    #[must_use]
    pub fn new<I, S>(questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            questions: questions.into_iter().map(Into::into).collect(),
        }
    }

    /// Reads a payload from raw part data.
    ///
    /// Returns `None` when `questions` is missing or malformed, so that such a
    /// part never shadows an earlier well-formed one in the same batch.
    #[must_use]
    pub fn from_data(data: &Value) -> Option<Self> {
        lenient_field(data, "questions").map(|questions| Self { questions })
    }
}

/// Payload of a `status` part.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPayload {
    /// Progress line shown while the answer streams.
    #[serde(default)]
    pub message: String,
}

impl StatusPayload {
    /// Creates a status payload.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Reads a payload from raw part data. A missing message reads as `""`.
    #[must_use]
    pub fn from_data(data: &Value) -> Self {
        Self {
            message: lenient_field(data, "message").unwrap_or_default(),
        }
    }
}

/// Decodes `data[key]`, treating null, missing and malformed values alike.
fn lenient_field<T: DeserializeOwned>(data: &Value, key: &str) -> Option<T> {
    let value = data.get(key).filter(|value| !value.is_null())?;
    T::deserialize(value)
        .inspect_err(|err| {
            tracing::debug!(field = key, error = %err, "ignoring malformed payload field");
        })
        .ok()
}
