//! Error types for decoding the upstream stream contract.
//!
//! Only transport framing can fail. Once a message list has been decoded,
//! every part is accepted and unrecognized content is ignored downstream.

use thiserror::Error;

/// Error returned when a role string does not name a known role.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid role: {0}")]
pub struct ParseRoleError(pub String);

/// Errors raised while decoding a serialized message list.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The payload is not a JSON array of messages.
    #[error("malformed message list: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The payload decoded, but a message carries an unknown role.
    #[error("message {index} has an invalid role: {source}")]
    InvalidRole {
        /// Position of the offending message in the list.
        index: usize,
        /// The underlying role parse failure.
        source: ParseRoleError,
    },
}
