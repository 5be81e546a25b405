//! Turn-scoped aggregation of side-channel data.
//!
//! A streamed answer carries, next to its text, parts describing sources,
//! news, images, a ticker, follow-up questions and a status line. This
//! module folds those parts into one live panel per turn and freezes
//! finished turns into a history the renderer can replay.
//!
//! # Architecture
//!
//! - **Domain**: pure values ([`domain::LiveState`], [`domain::Snapshot`], [`domain::TurnIndex`], ...)
//! - **Ports**: the [`ports::HistoryStore`] seam
//! - **Adapters**: [`adapters::InMemoryHistoryStore`]
//! - **Services**: the update pipeline and its orchestrator, [`services::PanelSession`]
//!
//! # Example
//!
//! ```
//! use turnkeeper::panel::{config::SessionConfig, services::PanelSession};
//! use turnkeeper::stream::domain::{Message, Part, Role, Source, SourcesPayload};
//!
//! let mut session = PanelSession::new(SessionConfig::default());
//! let mut messages = vec![
//!     Message::user("Latest on the Mars sample return?"),
//!     Message::new(Role::Assistant).with_part(Part::status("Searching web...")),
//! ];
//! session.ingest(&messages);
//!
//! if let Some(answer) = messages.last_mut() {
//!     answer.push_part(Part::sources(&SourcesPayload::new([Source::new(
//!         "https://example.org/msr",
//!         "Mars Sample Return update",
//!     )])));
//! }
//! session.ingest(&messages);
//!
//! assert_eq!(session.live().status(), "Searching web...");
//! assert_eq!(session.live().panel().sources.len(), 1);
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
