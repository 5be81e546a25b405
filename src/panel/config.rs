//! Session configuration.

use serde::{Deserialize, Serialize};

/// How the idempotency guard decides whether a batch needs reprocessing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeDetection {
    /// Reprocess only when the part count changes. Relies on the transport
    /// being append-only within a message.
    #[default]
    PartCount,
    /// Reprocess when the part count or a SHA-256 digest of the parts
    /// changes. Catches same-length updates with different content.
    Fingerprint,
}

/// How the turn tracker treats back-to-back assistant messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SameRolePolicy {
    /// Consecutive assistant messages belong to the same turn.
    #[default]
    MergeConsecutive,
    /// Every assistant message opens a new turn.
    CountEach,
}

/// Configuration for a [`PanelSession`](crate::panel::services::PanelSession).
///
/// # Examples
///
/// ```
/// use turnkeeper::panel::config::{ChangeDetection, SessionConfig};
///
/// let config = SessionConfig::default();
/// assert!(!config.freeze_on_boundary);
/// assert_eq!(config.change_detection, ChangeDetection::PartCount);
///
/// let auto = SessionConfig::auto_freezing();
/// assert!(auto.freeze_on_boundary);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Change detection used by the idempotency guard.
    pub change_detection: ChangeDetection,
    /// Fallback applied when roles do not alternate.
    pub same_role_policy: SameRolePolicy,
    /// Freeze the outgoing turn automatically when a boundary is detected,
    /// instead of relying on the host to freeze before resubmitting.
    pub freeze_on_boundary: bool,
}

impl SessionConfig {
    /// Creates a configuration that freezes outgoing turns at every boundary.
    #[must_use]
    pub fn auto_freezing() -> Self {
        Self {
            freeze_on_boundary: true,
            ..Self::default()
        }
    }

    /// Creates a configuration that fingerprints part content.
    #[must_use]
    pub fn fingerprinted() -> Self {
        Self {
            change_detection: ChangeDetection::Fingerprint,
            ..Self::default()
        }
    }
}
