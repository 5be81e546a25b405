//! Turn tracker: detects when a new conversation turn begins.

use crate::panel::{
    config::SameRolePolicy,
    domain::{RoleAnomaly, TurnIndex},
};
use crate::stream::domain::{Message, Role};
use tracing::{debug, warn};

/// A detected transition from one turn to the next.
///
/// One boundary is reported per update. When several turns begin in a single
/// update, `current` lands on the latest of them and the indices in between
/// are skipped: they never own the live state and get no snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    /// The last turn seen before this update, `None` when the first turn
    /// begins.
    pub previous: Option<TurnIndex>,
    /// The turn that now owns the live state.
    pub current: TurnIndex,
}

/// Result of one tracker observation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerUpdate {
    /// The boundary crossed by this update, if any.
    pub boundary: Option<Boundary>,
    /// Anomalies first seen in this update.
    pub anomalies: Vec<RoleAnomaly>,
}

/// Returns `true` if a message with `role` opens a new turn when it follows
/// a message with role `previous`.
///
/// System messages should be skipped by the caller so that they never split
/// or join turns.
#[must_use]
pub fn starts_turn(previous: Option<Role>, role: Role, policy: SameRolePolicy) -> bool {
    if !role.is_assistant() {
        return false;
    }
    match policy {
        SameRolePolicy::CountEach => true,
        SameRolePolicy::MergeConsecutive => previous != Some(Role::Assistant),
    }
}

/// Counts turns in a message list and collects alternation anomalies.
#[must_use]
pub fn count_turns(messages: &[Message], policy: SameRolePolicy) -> (u64, Vec<RoleAnomaly>) {
    let mut turns: u64 = 0;
    let mut anomalies = Vec::new();
    let mut previous: Option<Role> = None;

    for (position, message) in messages.iter().enumerate() {
        let role = message.role();
        if role == Role::System {
            continue;
        }
        if previous == Some(role) {
            anomalies.push(RoleAnomaly::ConsecutiveRole { role, position });
        }
        if starts_turn(previous, role, policy) {
            turns = turns.saturating_add(1);
        }
        previous = Some(role);
    }

    (turns, anomalies)
}

/// Tracks how many turns the session has seen.
///
/// The stored count only ever grows. A smaller count in a later update is
/// reported as [`RoleAnomaly::Regressed`] and otherwise ignored, so turn
/// indices are never handed out twice.
#[derive(Debug, Clone, Default)]
pub struct TurnTracker {
    policy: SameRolePolicy,
    observed: u64,
    reported_anomalies: usize,
}

impl TurnTracker {
    /// Creates a tracker that has seen no turns.
    #[must_use]
    pub const fn new(policy: SameRolePolicy) -> Self {
        Self {
            policy,
            observed: 0,
            reported_anomalies: 0,
        }
    }

    /// Returns the turn that currently owns the live state.
    #[must_use]
    pub const fn current_turn(&self) -> Option<TurnIndex> {
        TurnIndex::latest_of(self.observed)
    }

    /// Returns the policy applied to consecutive assistant messages.
    #[must_use]
    pub const fn policy(&self) -> SameRolePolicy {
        self.policy
    }

    /// Inspects the full message list and reports a boundary if the turn
    /// count grew since the last observation.
    pub fn observe(&mut self, messages: &[Message]) -> TrackerUpdate {
        let (observed, all_anomalies) = count_turns(messages, self.policy);

        let total = all_anomalies.len();
        let mut anomalies: Vec<RoleAnomaly> = all_anomalies
            .into_iter()
            .skip(self.reported_anomalies)
            .collect();
        self.reported_anomalies = total;

        let boundary = if observed > self.observed {
            if observed.saturating_sub(self.observed) > 1 {
                debug!(
                    from = self.observed,
                    to = observed,
                    "turn count advanced by more than one in a single update"
                );
            }
            let crossed = Boundary {
                previous: self.current_turn(),
                current: TurnIndex::new(observed.saturating_sub(1)),
            };
            self.observed = observed;
            Some(crossed)
        } else {
            if observed < self.observed {
                anomalies.push(RoleAnomaly::Regressed {
                    previous: self.observed,
                    observed,
                });
            }
            None
        };

        for anomaly in &anomalies {
            warn!(%anomaly, "message roles do not alternate as expected");
        }

        TrackerUpdate {
            boundary,
            anomalies,
        }
    }
}
