//! Upstream stream contract consumed by the panel aggregator.
//!
//! The streaming transport delivers an ordered, monotonically growing list of
//! messages. Each message carries a role and an ordered list of parts. This
//! module defines the typed view of that contract; the aggregation core only
//! ever looks at roles, ordering, and each part's discriminator and payload.
//!
//! # Example
//!
//! ```
//! use turnkeeper::stream::domain::{Message, Part, PartKind, Role};
//!
//! let message = Message::new(Role::Assistant)
//!     .with_part(Part::status("Searching web..."))
//!     .with_part(Part::ticker(Some("AAPL")));
//!
//! assert_eq!(message.parts().len(), 2);
//! assert_eq!(message.parts().first().map(|part| part.kind()), Some(PartKind::Status));
//! ```

pub mod decode;
pub mod domain;
pub mod error;

pub use decode::decode_messages;

#[cfg(test)]
mod tests;
