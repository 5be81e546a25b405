//! Turn numbering and per-turn lifecycle phase.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Zero-based index of a conversation turn.
///
/// Turn 0 is the exchange answered by the first assistant message. Indices
/// are assigned in increasing order and never reused.
///
/// # Examples
///
/// ```
/// use turnkeeper::panel::domain::TurnIndex;
///
/// let turn = TurnIndex::new(0);
/// assert_eq!(turn.next().value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TurnIndex(u64);

impl TurnIndex {
    /// Creates a turn index from a value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying index.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Returns the following turn index, saturating at `u64::MAX`.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns the index of the newest turn given how many turns have been
    /// observed, or `None` before the first one.
    #[must_use]
    pub const fn latest_of(observed: u64) -> Option<Self> {
        match observed.checked_sub(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl From<u64> for TurnIndex {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for TurnIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle phase of the turn currently owning the live state.
///
/// ```text
/// Pending --first applied part--> Accumulating --freeze--> Frozen
/// ```
///
/// A turn can also be frozen straight from `Pending`. `Frozen` is terminal;
/// the next turn starts again at `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnPhase {
    /// Turn just opened, nothing applied yet.
    Pending,
    /// At least one part has been applied.
    Accumulating,
    /// Copied into the history store.
    Frozen,
}

impl TurnPhase {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accumulating => "accumulating",
            Self::Frozen => "frozen",
        }
    }

    /// Returns `true` for [`TurnPhase::Frozen`].
    #[must_use]
    pub const fn is_frozen(self) -> bool {
        matches!(self, Self::Frozen)
    }

    /// Returns the phase after a batch has been applied.
    ///
    /// `applied` reports whether the batch changed any live field.
    #[must_use]
    pub const fn after_apply(self, applied: bool) -> Self {
        match self {
            Self::Pending if applied => Self::Accumulating,
            other => other,
        }
    }
}

impl fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
