//! Shared world state for turn panel BDD scenarios.

use rstest::fixture;
use turnkeeper::{
    panel::{
        config::SessionConfig,
        services::{PanelSession, UpdateOutcome},
    },
    stream::domain::{Message, Part, Role},
};

/// Scenario world for turn panel behaviour tests.
pub struct PanelWorld {
    pub session: PanelSession,
    pub messages: Vec<Message>,
    pub last_outcome: Option<UpdateOutcome>,
}

impl PanelWorld {
    /// Creates a world around a session with the given configuration.
    #[must_use]
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            session: PanelSession::new(config),
            messages: Vec::new(),
            last_outcome: None,
        }
    }

    /// Delivers the current message list to the session.
    pub fn deliver(&mut self) {
        self.last_outcome = Some(self.session.ingest(&self.messages));
    }

    /// Appends a part to the streaming answer, opening one if needed, and
    /// delivers the update.
    pub fn stream(&mut self, part: Part) {
        match self.messages.last_mut() {
            Some(answer) if answer.role() == Role::Assistant => answer.push_part(part),
            _ => self.messages.push(Message::new(Role::Assistant).with_part(part)),
        }
        self.deliver();
    }
}

impl Default for PanelWorld {
    fn default() -> Self {
        Self::with_config(SessionConfig::default())
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> PanelWorld {
    PanelWorld::default()
}
