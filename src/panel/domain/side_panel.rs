//! The five data fields shown beside an answer.

use crate::stream::domain::{ImageItem, NewsItem, Source};
use serde::{Deserialize, Serialize};

/// Side-channel data for one turn: everything a snapshot keeps.
///
/// The status line is deliberately absent; it only matters while a turn is
/// streaming and lives on [`LiveState`](super::LiveState).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SidePanel {
    /// Cited search results.
    pub sources: Vec<Source>,
    /// News results.
    pub news: Vec<NewsItem>,
    /// Image results.
    pub images: Vec<ImageItem>,
    /// Stock ticker to chart, if any.
    pub ticker: Option<String>,
    /// Suggested follow-up questions.
    pub follow_up_questions: Vec<String>,
}

impl SidePanel {
    /// Returns `true` when every field holds its default value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
            && self.news.is_empty()
            && self.images.is_empty()
            && self.ticker.is_none()
            && self.follow_up_questions.is_empty()
    }
}
