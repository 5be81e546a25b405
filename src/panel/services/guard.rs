//! Idempotency guard: skips batches that were already processed.

use crate::panel::config::ChangeDetection;
use crate::stream::domain::Part;
use sha2::{Digest, Sha256};

/// Remembers which message was processed last and what its batch looked like.
///
/// A batch is keyed by the position of its message in the list, so a message
/// appended within the same turn is always processed even when its part
/// count matches the previous one. The guard never infers a reset: a
/// shrinking part count is simply a change. The session resets it explicitly
/// at every turn boundary.
#[derive(Debug, Clone, Default)]
pub struct IdempotencyGuard {
    detection: ChangeDetection,
    position: Option<usize>,
    processed_parts: usize,
    fingerprint: Option<[u8; 32]>,
}

impl IdempotencyGuard {
    /// Creates a guard with the given change detection strategy.
    #[must_use]
    pub const fn new(detection: ChangeDetection) -> Self {
        Self {
            detection,
            position: None,
            processed_parts: 0,
            fingerprint: None,
        }
    }

    /// Returns whether the `parts` of the message at `position` must be
    /// reprocessed, recording them as seen.
    pub fn observe(&mut self, position: usize, parts: &[Part]) -> bool {
        let moved = self.position != Some(position);
        let count_changed = moved || parts.len() != self.processed_parts;
        self.position = Some(position);
        self.processed_parts = parts.len();

        match self.detection {
            ChangeDetection::PartCount => count_changed,
            ChangeDetection::Fingerprint => {
                let digest = fingerprint(parts);
                let content_changed = self.fingerprint != Some(digest);
                self.fingerprint = Some(digest);
                count_changed || content_changed
            }
        }
    }

    /// Forgets the last processed batch.
    pub const fn reset(&mut self) {
        self.position = None;
        self.processed_parts = 0;
        self.fingerprint = None;
    }

    /// Returns the part count of the last processed batch.
    #[must_use]
    pub const fn processed_parts(&self) -> usize {
        self.processed_parts
    }
}

/// SHA-256 over each part's discriminator, data and text, netstring-framed so
/// that adjacent fields cannot collide.
fn fingerprint(parts: &[Part]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for part in parts {
        let data = part.payload().to_string();
        let text = part.text_content().unwrap_or_default();
        for field in [part.discriminator(), data.as_str(), text] {
            hasher.update(format!("{}:", field.len()));
            hasher.update(field);
        }
    }
    hasher.finalize().into()
}
