//! Turnkeeper: turn-scoped aggregation of streamed answer side-channels.
//!
//! A live answer stream interleaves answer text with side-channel parts:
//! citations, news, images, a ticker symbol, follow-up questions and a
//! status line. This crate merges those parts incrementally into one panel
//! per conversation turn, keeps turns isolated from each other, and freezes
//! finished turns so earlier answers can be redisplayed with their panels.
//!
//! # Modules
//!
//! - [`stream`]: the upstream message and part contract
//! - [`panel`]: turn tracking, aggregation, freezing and history
//!
//! The crate does no I/O and keeps nothing across sessions. The transport
//! that produces messages and the renderer that consumes panels are
//! external collaborators.

pub mod panel;
pub mod stream;
