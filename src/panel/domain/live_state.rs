//! The single mutable accumulator for the streaming turn.

use super::SidePanel;
use crate::stream::domain::{FollowupPayload, SourcesPayload, TickerPayload};
use serde::Serialize;

/// Side-channel data of the turn currently being streamed.
///
/// Exactly one instance exists per session and it is reused across turns:
/// a boundary clears it instead of allocating a new one. Hosts read it
/// through [`PanelSession::live`](crate::panel::services::PanelSession::live);
/// only the aggregator writes to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveState {
    #[serde(flatten)]
    panel: SidePanel,
    status: String,
}

impl LiveState {
    /// Creates an empty live state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the five data fields.
    #[must_use]
    pub const fn panel(&self) -> &SidePanel {
        &self.panel
    }

    /// Returns the current status line; empty when none has been streamed.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns `true` when at least one data field holds something.
    ///
    /// The status line is ignored: a turn that only reported progress has
    /// nothing worth freezing.
    #[must_use]
    pub fn has_data(&self) -> bool {
        !self.panel.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.panel = SidePanel::default();
        self.status.clear();
    }

    pub(crate) fn replace_sources(&mut self, payload: SourcesPayload) {
        self.panel.sources = payload.sources;
        self.panel.news = payload.news_results.unwrap_or_default();
        self.panel.images = payload.image_results.unwrap_or_default();
    }

    pub(crate) fn replace_ticker(&mut self, payload: TickerPayload) {
        self.panel.ticker = payload.symbol;
    }

    /// Returns `false` when the payload was empty and nothing changed.
    pub(crate) fn replace_follow_ups(&mut self, payload: FollowupPayload) -> bool {
        if payload.questions.is_empty() {
            return false;
        }
        self.panel.follow_up_questions = payload.questions;
        true
    }

    pub(crate) fn replace_status(&mut self, message: String) {
        self.status = message;
    }
}
