//! Frozen per-turn records.

use super::{SidePanel, TurnIndex};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Why a turn's live state was frozen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreezeCause {
    /// The host froze the turn before submitting a new query.
    Resubmission,
    /// The session froze the outgoing turn when the next one began.
    Boundary,
    /// The host requested a freeze directly.
    Explicit,
}

impl FreezeCause {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Resubmission => "resubmission",
            Self::Boundary => "boundary",
            Self::Explicit => "explicit",
        }
    }
}

/// Immutable copy of a completed turn's side panel.
///
/// # Examples
///
/// ```
/// use mockable::DefaultClock;
/// use turnkeeper::panel::domain::{FreezeCause, SidePanel, Snapshot, TurnIndex};
///
/// let snapshot = Snapshot::new(
///     TurnIndex::new(0),
///     SidePanel::default(),
///     FreezeCause::Explicit,
///     &DefaultClock,
/// );
/// assert_eq!(snapshot.turn(), TurnIndex::new(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    turn: TurnIndex,
    panel: SidePanel,
    cause: FreezeCause,
    frozen_at: DateTime<Utc>,
}

impl Snapshot {
    /// Freezes a panel under the given turn index.
    #[must_use]
    pub fn new(turn: TurnIndex, panel: SidePanel, cause: FreezeCause, clock: &impl Clock) -> Self {
        Self {
            turn,
            panel,
            cause,
            frozen_at: clock.utc(),
        }
    }

    /// Returns the turn this snapshot belongs to.
    #[must_use]
    pub const fn turn(&self) -> TurnIndex {
        self.turn
    }

    /// Returns the frozen data fields.
    #[must_use]
    pub const fn panel(&self) -> &SidePanel {
        &self.panel
    }

    /// Returns why the snapshot was taken.
    #[must_use]
    pub const fn cause(&self) -> FreezeCause {
        self.cause
    }

    /// Returns when the snapshot was taken.
    #[must_use]
    pub const fn frozen_at(&self) -> DateTime<Utc> {
        self.frozen_at
    }
}
