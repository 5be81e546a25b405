//! Decoding of serialized message lists.

use crate::stream::{
    domain::{Message, Part, Role},
    error::DecodeError,
};
use serde::Deserialize;

#[derive(Deserialize)]
struct WireMessage {
    #[serde(default)]
    id: String,
    role: String,
    #[serde(default)]
    parts: Vec<Part>,
}

/// Decodes a JSON array of messages.
///
/// Parts are accepted as-is; only the envelope (array shape, roles) is
/// checked here.
///
/// # Errors
///
/// Returns [`DecodeError::Malformed`] when the input is not a JSON array of
/// message objects, and [`DecodeError::InvalidRole`] when a message names an
/// unknown role.
///
/// # Examples
///
/// ```
/// use turnkeeper::stream::decode_messages;
///
/// let messages = decode_messages(
///     r#"[{"role":"user","parts":[{"type":"text","text":"hi"}]}]"#,
/// )
/// .expect("valid message list");
/// assert_eq!(messages.len(), 1);
/// ```
pub fn decode_messages(input: &str) -> Result<Vec<Message>, DecodeError> {
    let wire: Vec<WireMessage> = serde_json::from_str(input)?;
    wire.into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let role = Role::try_from(raw.role.as_str())
                .map_err(|source| DecodeError::InvalidRole { index, source })?;
            Ok(Message::new(role).with_id(raw.id).with_parts(raw.parts))
        })
        .collect()
}
