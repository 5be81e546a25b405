//! Domain types for turn-scoped panel aggregation.
//!
//! Pure values with no storage or transport dependencies. Mutation of the
//! live accumulator is crate-private; hosts only ever read it.

mod anomaly;
mod batch;
mod ids;
mod live_state;
mod side_panel;
mod snapshot;
mod turn;

pub use anomaly::RoleAnomaly;
pub use batch::ClassifiedBatch;
pub use ids::SessionId;
pub use live_state::LiveState;
pub use side_panel::SidePanel;
pub use snapshot::{FreezeCause, Snapshot};
pub use turn::{TurnIndex, TurnPhase};
