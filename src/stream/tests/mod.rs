//! Unit tests for the stream module.
//!
//! Covers role parsing, part discrimination, lenient payload decoding and
//! message list decoding.
