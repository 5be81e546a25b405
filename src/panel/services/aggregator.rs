//! Aggregator: applies a classified batch onto the live state.

use crate::panel::domain::{ClassifiedBatch, LiveState};

/// Which live fields a batch actually replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppliedKinds {
    /// Sources, news and images were replaced.
    pub sources: bool,
    /// The ticker was replaced or cleared.
    pub ticker: bool,
    /// Follow-up questions were replaced.
    pub followup: bool,
    /// The status line was replaced.
    pub status: bool,
}

impl AppliedKinds {
    /// Returns `true` if any field was replaced.
    #[must_use]
    pub const fn any(self) -> bool {
        self.sources || self.ticker || self.followup || self.status
    }
}

/// Applies a batch with full replacement per kind.
///
/// - `sources` replaces sources, news and images together; missing news or
///   images become empty.
/// - `ticker` replaces the ticker, and a `None` symbol clears it.
/// - `followup` replaces the questions unless the list is empty, which
///   counts as no update.
/// - `status` always replaces the status line, even with `""`.
///
/// Kinds absent from the batch leave their live values untouched.
pub fn apply(live: &mut LiveState, batch: ClassifiedBatch) -> AppliedKinds {
    let mut applied = AppliedKinds::default();

    if let Some(sources) = batch.sources {
        live.replace_sources(sources);
        applied.sources = true;
    }
    if let Some(ticker) = batch.ticker {
        live.replace_ticker(ticker);
        applied.ticker = true;
    }
    if let Some(followup) = batch.followup {
        applied.followup = live.replace_follow_ups(followup);
    }
    if let Some(status) = batch.status {
        live.replace_status(status.message);
        applied.status = true;
    }

    applied
}
