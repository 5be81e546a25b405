//! Part classifier: picks the last payload of each kind from a batch.

use crate::panel::domain::ClassifiedBatch;
use crate::stream::domain::{
    FollowupPayload, Part, PartKind, SourcesPayload, StatusPayload, TickerPayload,
};
use tracing::trace;

/// Scans a batch once and keeps the last payload seen for every recognized
/// kind. Earlier payloads of the same kind are discarded.
///
/// A side-channel part without data does not count as a payload of its
/// kind. Text parts and unrecognized kinds are skipped; the latter are
/// counted in [`ClassifiedBatch::unrecognized`].
///
/// # Examples
///
/// ```
/// use turnkeeper::panel::services::classify;
/// use turnkeeper::stream::domain::Part;
///
/// let batch = classify(&[
///     Part::status("Searching web..."),
///     Part::ticker(Some("AAPL")),
///     Part::ticker(Some("MSFT")),
/// ]);
/// let ticker = batch.ticker.expect("ticker payload");
/// assert_eq!(ticker.symbol.as_deref(), Some("MSFT"));
/// ```
#[must_use]
pub fn classify(parts: &[Part]) -> ClassifiedBatch {
    let mut batch = ClassifiedBatch::default();

    for part in parts {
        let kind = part.kind();
        if kind.is_side_channel() && !part.has_payload() {
            trace!(kind = kind.as_str(), "skipping data part without payload");
            continue;
        }
        let data = part.payload();
        match kind {
            PartKind::Sources => batch.sources = Some(SourcesPayload::from_data(data)),
            PartKind::Ticker => batch.ticker = Some(TickerPayload::from_data(data)),
            PartKind::Followup => {
                if let Some(payload) = FollowupPayload::from_data(data) {
                    batch.followup = Some(payload);
                }
            }
            PartKind::Status => batch.status = Some(StatusPayload::from_data(data)),
            PartKind::Text => {}
            PartKind::Unrecognized(discriminator) => {
                trace!(%discriminator, "ignoring unrecognized part");
                batch.unrecognized = batch.unrecognized.saturating_add(1);
            }
        }
    }

    batch
}
