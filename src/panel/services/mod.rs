//! Service layer for panel aggregation.
//!
//! Leaves first: the [`guard`], [`tracker`], [`classifier`] and
//! [`aggregator`] are small, independently testable steps; [`session`]
//! wires them into the per-update pipeline and owns the state; [`view`]
//! projects that state for the renderer.

pub mod aggregator;
pub mod classifier;
pub mod guard;
pub mod session;
pub mod tracker;
pub mod view;

pub use aggregator::{AppliedKinds, apply};
pub use classifier::classify;
pub use guard::IdempotencyGuard;
pub use session::{PanelSession, UpdateOutcome};
pub use tracker::{Boundary, TrackerUpdate, TurnTracker};
pub use view::{ConversationView, Exchange, PanelSource};
