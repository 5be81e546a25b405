//! Read-only projection of a conversation for the renderer.
//!
//! Groups messages into query/answer exchanges using the same turn numbering
//! as the tracker, and resolves where each exchange's panel comes from.

use crate::panel::{
    config::SameRolePolicy,
    domain::{LiveState, SidePanel, Snapshot, TurnIndex},
    ports::HistoryStore,
    services::tracker::starts_turn,
};
use crate::stream::domain::{Message, Role};

/// Where the renderer should read an exchange's side panel from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelSource<'a> {
    /// The turn is the current one; read the live state.
    Live(&'a LiveState),
    /// The turn was frozen into history.
    Frozen(&'a Snapshot),
    /// Nothing was retained for this turn, or it has no answer yet.
    Missing,
}

impl<'a> PanelSource<'a> {
    /// Returns the panel data, if any is available.
    #[must_use]
    pub const fn panel(&self) -> Option<&'a SidePanel> {
        match *self {
            Self::Live(live) => Some(live.panel()),
            Self::Frozen(snapshot) => Some(snapshot.panel()),
            Self::Missing => None,
        }
    }
}

/// One user query together with the answer it received.
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange<'a> {
    /// The user's message; `None` when an answer arrived without a query.
    pub query: Option<&'a Message>,
    /// The answering message; the latest one when several were merged.
    pub answer: Option<&'a Message>,
    /// The turn the answer opened.
    pub turn: Option<TurnIndex>,
    /// Where to read the side panel from.
    pub panel: PanelSource<'a>,
}

impl Exchange<'_> {
    /// Returns the query text, empty when there is no query.
    #[must_use]
    pub fn query_text(&self) -> String {
        self.query.map(Message::text).unwrap_or_default()
    }
}

/// Everything the renderer needs to draw the conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationView<'a> {
    /// Exchanges in display order.
    pub exchanges: Vec<Exchange<'a>>,
    /// The turn owning the live state.
    pub current_turn: Option<TurnIndex>,
    /// The latest non-system message is a user query still waiting for its
    /// answer.
    pub awaiting_response: bool,
    /// The live status line.
    pub status: &'a str,
}

/// Builds the renderer projection.
#[must_use]
pub fn project<'a, H: HistoryStore>(
    messages: &'a [Message],
    policy: SameRolePolicy,
    current_turn: Option<TurnIndex>,
    live: &'a LiveState,
    history: &'a H,
) -> ConversationView<'a> {
    let resolve = |turn: TurnIndex| {
        if current_turn == Some(turn) {
            PanelSource::Live(live)
        } else {
            history.get(turn).map_or(PanelSource::Missing, PanelSource::Frozen)
        }
    };

    let mut exchanges: Vec<Exchange<'a>> = Vec::new();
    let mut previous: Option<Role> = None;
    let mut next_turn = TurnIndex::new(0);

    for message in messages {
        let role = message.role();
        match role {
            Role::System => continue,
            Role::User => exchanges.push(Exchange {
                query: Some(message),
                answer: None,
                turn: None,
                panel: PanelSource::Missing,
            }),
            Role::Assistant if starts_turn(previous, role, policy) => {
                let turn = next_turn;
                next_turn = next_turn.next();
                let answered = Exchange {
                    query: None,
                    answer: Some(message),
                    turn: Some(turn),
                    panel: resolve(turn),
                };
                match exchanges.last_mut() {
                    Some(open) if open.answer.is_none() => {
                        *open = Exchange {
                            query: open.query,
                            ..answered
                        };
                    }
                    _ => exchanges.push(answered),
                }
            }
            Role::Assistant => {
                if let Some(open) = exchanges.last_mut() {
                    open.answer = Some(message);
                }
            }
        }
        previous = Some(role);
    }

    let awaiting_response = messages
        .iter()
        .rev()
        .find(|message| message.role() != Role::System)
        .is_some_and(|message| message.role() == Role::User);

    ConversationView {
        exchanges,
        current_turn,
        awaiting_response,
        status: live.status(),
    }
}
