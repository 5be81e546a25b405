//! Port trait definitions for the panel subsystem.
//!
//! The history store is the only seam: the session owns one instance and
//! talks to it through [`HistoryStore`], so hosts can swap in a bounded or
//! instrumented store without touching the orchestration.

pub mod history;

pub use history::HistoryStore;
