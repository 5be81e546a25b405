//! Message author roles.

use crate::stream::error::ParseRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The author of a streamed message.
///
/// Turn detection counts [`Role::Assistant`] messages; user and system
/// messages never open a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System prompt or host-injected message.
    System,
    /// A query typed by the user.
    User,
    /// A generated answer.
    Assistant,
}

impl Role {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }

    /// Returns `true` for [`Role::Assistant`].
    #[must_use]
    pub const fn is_assistant(self) -> bool {
        matches!(self, Self::Assistant)
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "system" => Ok(Self::System),
            "user" => Ok(Self::User),
            "assistant" => Ok(Self::Assistant),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
