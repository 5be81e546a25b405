//! Violations of strict user/assistant alternation.

use crate::stream::domain::Role;
use serde::Serialize;
use std::fmt;

/// A deviation from the expected message ordering, detected by the turn
/// tracker.
///
/// Anomalies never stop processing. The tracker applies the configured
/// [`SameRolePolicy`](crate::panel::config::SameRolePolicy) and reports what
/// it saw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoleAnomaly {
    /// Two messages with the same role appear back to back.
    ConsecutiveRole {
        /// The repeated role.
        role: Role,
        /// Position of the second message in the list.
        position: usize,
    },
    /// The observed turn count went down between two updates.
    Regressed {
        /// Count stored before the update.
        previous: u64,
        /// Count observed in the update.
        observed: u64,
    },
}

impl fmt::Display for RoleAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConsecutiveRole { role, position } => {
                write!(f, "consecutive {role} messages at position {position}")
            }
            Self::Regressed { previous, observed } => {
                write!(f, "turn count regressed from {previous} to {observed}")
            }
        }
    }
}
