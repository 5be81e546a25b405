//! In-memory implementation of the [`HistoryStore`] port.
//!
//! The default store for a session. Ordered by turn index so the renderer
//! can walk prior turns in display order.

use std::collections::BTreeMap;

use crate::panel::{
    domain::{Snapshot, TurnIndex},
    ports::HistoryStore,
};

/// In-memory implementation of [`HistoryStore`].
///
/// # Example
///
/// ```
/// use mockable::DefaultClock;
/// use turnkeeper::panel::adapters::memory::InMemoryHistoryStore;
/// use turnkeeper::panel::domain::{FreezeCause, SidePanel, Snapshot, TurnIndex};
/// use turnkeeper::panel::ports::HistoryStore;
///
/// let mut store = InMemoryHistoryStore::new();
/// let snapshot = Snapshot::new(
///     TurnIndex::new(0),
///     SidePanel::default(),
///     FreezeCause::Explicit,
///     &DefaultClock,
/// );
/// assert!(store.record(snapshot).is_none());
/// assert!(store.contains(TurnIndex::new(0)));
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryHistoryStore {
    snapshots: BTreeMap<TurnIndex, Snapshot>,
}

impl InMemoryHistoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates over the recorded snapshots in turn order.
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.values()
    }

    /// Returns the snapshot with the highest turn index.
    #[must_use]
    pub fn latest(&self) -> Option<&Snapshot> {
        self.snapshots.values().next_back()
    }
}

impl HistoryStore for InMemoryHistoryStore {
    fn record(&mut self, snapshot: Snapshot) -> Option<Snapshot> {
        self.snapshots.insert(snapshot.turn(), snapshot)
    }

    fn get(&self, turn: TurnIndex) -> Option<&Snapshot> {
        self.snapshots.get(&turn)
    }

    fn turns(&self) -> Vec<TurnIndex> {
        self.snapshots.keys().copied().collect()
    }

    fn len(&self) -> usize {
        self.snapshots.len()
    }
}
