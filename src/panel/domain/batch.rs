//! Output of the part classifier.

use crate::stream::domain::{FollowupPayload, SourcesPayload, StatusPayload, TickerPayload};

/// The last payload of each recognized kind found in one batch of parts.
///
/// A `None` field means no payload of that kind was present, which the
/// aggregator treats as "leave the live value alone".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedBatch {
    /// Last `sources` payload.
    pub sources: Option<SourcesPayload>,
    /// Last `ticker` payload.
    pub ticker: Option<TickerPayload>,
    /// Last well-formed `followup` payload.
    pub followup: Option<FollowupPayload>,
    /// Last `status` payload.
    pub status: Option<StatusPayload>,
    /// Number of parts skipped because their kind is unrecognized.
    pub unrecognized: usize,
}

impl ClassifiedBatch {
    /// Returns `true` when no side-channel payload was found.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sources.is_none()
            && self.ticker.is_none()
            && self.followup.is_none()
            && self.status.is_none()
    }
}
