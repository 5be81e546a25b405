//! Domain types for the stream contract.
//!
//! All types are plain values, serialisable via serde, and carry no
//! transport framing.

mod message;
mod part;
mod payload;
mod role;

pub use message::Message;
pub use part::{Part, PartKind};
pub use payload::{
    FollowupPayload, ImageItem, NewsItem, Source, SourcesPayload, StatusPayload, TickerPayload,
};
pub use role::Role;
