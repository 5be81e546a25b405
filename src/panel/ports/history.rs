//! History store port.
//!
//! Maps a turn index to the frozen snapshot of that turn.

use crate::panel::domain::{Snapshot, TurnIndex};

/// Port for the per-session index of frozen turns.
///
/// # Implementation Notes
///
/// Implementations must ensure:
/// - At most one snapshot is kept per turn index
/// - Recording an index that already exists replaces the old snapshot
///   (last write wins) and hands the old one back
/// - Snapshots are never modified after they are recorded
///
/// The store lives only as long as its session; nothing is persisted.
pub trait HistoryStore {
    /// Records a snapshot under its own turn index.
    ///
    /// Returns the snapshot it replaced, if any.
    fn record(&mut self, snapshot: Snapshot) -> Option<Snapshot>;

    /// Returns the snapshot for a turn, if one was recorded.
    #[must_use]
    fn get(&self, turn: TurnIndex) -> Option<&Snapshot>;

    /// Returns the recorded turn indices in ascending order.
    #[must_use]
    fn turns(&self) -> Vec<TurnIndex>;

    /// Returns the number of recorded turns.
    #[must_use]
    fn len(&self) -> usize;

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if a snapshot exists for the turn.
    #[must_use]
    fn contains(&self, turn: TurnIndex) -> bool {
        self.get(turn).is_some()
    }
}
