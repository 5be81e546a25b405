//! Streamed messages.

use super::{Part, PartKind, Role};
use serde::{Deserialize, Serialize};

/// One message of the conversation as delivered by the transport.
///
/// The transport re-delivers the whole message list on every update; the
/// most recent message grows as new parts stream in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    id: String,
    role: Role,
    #[serde(default)]
    parts: Vec<Part>,
}

impl Message {
    /// Creates an empty message with the given role.
    #[must_use]
    pub const fn new(role: Role) -> Self {
        Self {
            id: String::new(),
            role,
            parts: Vec::new(),
        }
    }

    /// Creates a user message holding a single text part.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User).with_part(Part::text(text))
    }

    /// Sets the transport-assigned identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Appends a part.
    #[must_use]
    pub fn with_part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    /// Appends several parts in order.
    #[must_use]
    pub fn with_parts(mut self, parts: impl IntoIterator<Item = Part>) -> Self {
        self.parts.extend(parts);
        self
    }

    /// Appends a part in place, as a streaming transport does.
    pub fn push_part(&mut self, part: Part) {
        self.parts.push(part);
    }

    /// Returns the transport-assigned identifier, empty when none was sent.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the author role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the parts in delivery order.
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Concatenates the message's text parts.
    #[must_use]
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter(|part| part.kind() == PartKind::Text)
            .filter_map(Part::text_content)
            .collect()
    }
}
