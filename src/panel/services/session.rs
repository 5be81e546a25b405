//! Reset/freeze orchestration for one conversation session.

use crate::panel::{
    adapters::InMemoryHistoryStore,
    config::SessionConfig,
    domain::{FreezeCause, LiveState, RoleAnomaly, SessionId, Snapshot, TurnIndex, TurnPhase},
    ports::HistoryStore,
    services::{
        aggregator::{AppliedKinds, apply},
        classifier::classify,
        guard::IdempotencyGuard,
        tracker::{Boundary, TurnTracker},
        view::{ConversationView, project},
    },
};
use crate::stream::domain::Message;
use mockable::{Clock, DefaultClock};
use tracing::{debug, info};

/// What a single [`PanelSession::ingest`] call did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// The turn boundary crossed by this update.
    pub boundary: Option<Boundary>,
    /// The outgoing turn frozen automatically at the boundary.
    pub auto_frozen: Option<TurnIndex>,
    /// `false` when the idempotency guard skipped the batch.
    pub processed: bool,
    /// Live fields replaced by the batch.
    pub applied: AppliedKinds,
    /// Parts skipped because their kind is unrecognized.
    pub unrecognized: usize,
    /// Ordering anomalies first seen in this update.
    pub anomalies: Vec<RoleAnomaly>,
}

/// Owns the live state and history of one conversation.
///
/// Every transport update goes through [`ingest`](Self::ingest), which runs
/// the pipeline to completion: turn tracking, the idempotency guard,
/// classification and aggregation. The renderer reads the result through
/// [`live`](Self::live), [`history`](Self::history) and
/// [`view`](Self::view). The session is single-threaded; hosts serialise
/// updates.
///
/// # Example
///
/// ```
/// use turnkeeper::panel::{config::SessionConfig, services::PanelSession};
/// use turnkeeper::stream::domain::{Message, Part, Role};
///
/// let mut session = PanelSession::new(SessionConfig::default());
/// let messages = vec![
///     Message::user("What is Apple trading at?"),
///     Message::new(Role::Assistant).with_part(Part::ticker(Some("AAPL"))),
/// ];
///
/// session.ingest(&messages);
/// assert_eq!(session.live().panel().ticker.as_deref(), Some("AAPL"));
///
/// let frozen = session.prepare_submission();
/// assert_eq!(frozen.map(|turn| turn.value()), Some(0));
/// ```
#[derive(Debug)]
pub struct PanelSession<H = InMemoryHistoryStore, C = DefaultClock>
where
    H: HistoryStore,
    C: Clock,
{
    id: SessionId,
    config: SessionConfig,
    guard: IdempotencyGuard,
    tracker: TurnTracker,
    live: LiveState,
    phase: TurnPhase,
    history: H,
    clock: C,
}

impl PanelSession {
    /// Creates a session backed by an in-memory history store.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self::with_store(config, InMemoryHistoryStore::new(), DefaultClock)
    }
}

impl Default for PanelSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl<H, C> PanelSession<H, C>
where
    H: HistoryStore,
    C: Clock,
{
    /// Creates a session with an explicit history store and clock.
    #[must_use]
    pub fn with_store(config: SessionConfig, history: H, clock: C) -> Self {
        let id = SessionId::new();
        debug!(session = %id, ?config, "panel session started");
        Self {
            id,
            guard: IdempotencyGuard::new(config.change_detection),
            tracker: TurnTracker::new(config.same_role_policy),
            config,
            live: LiveState::new(),
            phase: TurnPhase::Pending,
            history,
            clock,
        }
    }

    /// Processes one transport update: the full, ordered message list.
    ///
    /// The tracker always runs first so that parts of a new turn are never
    /// merged into the previous turn's state. Only the parts of the most
    /// recent message are classified; a newly appended message is always
    /// classified, even when it merges into the current turn.
    pub fn ingest(&mut self, messages: &[Message]) -> UpdateOutcome {
        let tracked = self.tracker.observe(messages);
        let mut outcome = UpdateOutcome {
            boundary: tracked.boundary,
            anomalies: tracked.anomalies,
            ..UpdateOutcome::default()
        };

        if let Some(boundary) = tracked.boundary {
            outcome.auto_frozen = self.cross_boundary(boundary);
        }

        let Some(latest) = messages.last() else {
            return outcome;
        };
        let position = messages.len().saturating_sub(1);
        if !self.guard.observe(position, latest.parts()) {
            debug!(
                session = %self.id,
                position,
                parts = latest.parts().len(),
                "batch unchanged, skipping"
            );
            return outcome;
        }

        let batch = classify(latest.parts());
        outcome.processed = true;
        outcome.unrecognized = batch.unrecognized;
        outcome.applied = apply(&mut self.live, batch);

        if self.tracker.current_turn().is_some() {
            if self.phase.is_frozen() && outcome.applied.any() {
                debug!(
                    session = %self.id,
                    "late parts applied after freeze; history keeps the frozen snapshot"
                );
            }
            self.phase = self.phase.after_apply(outcome.applied.any());
        }

        outcome
    }

    /// Freezes the current turn before the host submits a new query.
    ///
    /// Writes a snapshot only if the live state holds data that is not
    /// already recorded verbatim. Returns the turn that was frozen.
    pub fn prepare_submission(&mut self) -> Option<TurnIndex> {
        let turn = self.tracker.current_turn()?;
        if !self.live.has_data() {
            debug!(session = %self.id, %turn, "nothing to freeze before submission");
            return None;
        }
        let already_recorded = self.phase.is_frozen()
            && self
                .history
                .get(turn)
                .is_some_and(|snapshot| snapshot.panel() == self.live.panel());
        if already_recorded {
            return None;
        }
        Some(self.freeze(turn, FreezeCause::Resubmission))
    }

    /// Freezes the current turn unconditionally, even when it is empty.
    ///
    /// Returns `None` before the first turn has begun.
    pub fn freeze_current(&mut self) -> Option<TurnIndex> {
        let turn = self.tracker.current_turn()?;
        Some(self.freeze(turn, FreezeCause::Explicit))
    }

    /// Returns the session identifier.
    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    /// Returns the session configuration.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the live state of the current turn.
    #[must_use]
    pub const fn live(&self) -> &LiveState {
        &self.live
    }

    /// Returns the lifecycle phase of the current turn.
    #[must_use]
    pub const fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Returns the turn owning the live state, `None` before the first answer.
    #[must_use]
    pub const fn current_turn(&self) -> Option<TurnIndex> {
        self.tracker.current_turn()
    }

    /// Returns the history store.
    #[must_use]
    pub const fn history(&self) -> &H {
        &self.history
    }

    /// Returns the frozen snapshot of a turn.
    #[must_use]
    pub fn snapshot(&self, turn: TurnIndex) -> Option<&Snapshot> {
        self.history.get(turn)
    }

    /// Builds the renderer projection for the given message list.
    #[must_use]
    pub fn view<'a>(&'a self, messages: &'a [Message]) -> ConversationView<'a> {
        project(
            messages,
            self.config.same_role_policy,
            self.current_turn(),
            &self.live,
            &self.history,
        )
    }

    /// Ends the session and hands back its history store.
    ///
    /// The live state is dropped; anything not frozen by now is discarded.
    #[must_use]
    pub fn end(self) -> H {
        info!(
            session = %self.id,
            turns = self.history.len(),
            discarded_live = self.live.has_data() && !self.phase.is_frozen(),
            "panel session ended"
        );
        self.history
    }

    fn cross_boundary(&mut self, boundary: Boundary) -> Option<TurnIndex> {
        let should_freeze =
            self.config.freeze_on_boundary && !self.phase.is_frozen() && self.live.has_data();
        let auto_frozen = boundary
            .previous
            .filter(|_| should_freeze)
            .map(|previous| self.freeze(previous, FreezeCause::Boundary));

        self.live.clear();
        self.guard.reset();
        self.phase = TurnPhase::Pending;

        info!(
            session = %self.id,
            previous = ?boundary.previous,
            current = %boundary.current,
            "turn boundary"
        );
        auto_frozen
    }

    fn freeze(&mut self, turn: TurnIndex, cause: FreezeCause) -> TurnIndex {
        let snapshot = Snapshot::new(turn, self.live.panel().clone(), cause, &self.clock);
        if let Some(replaced) = self.history.record(snapshot) {
            debug!(
                session = %self.id,
                %turn,
                replaced_cause = replaced.cause().as_str(),
                "replaced existing snapshot"
            );
        }
        self.phase = TurnPhase::Frozen;
        info!(session = %self.id, %turn, cause = cause.as_str(), "turn frozen");
        turn
    }
}
