//! When steps for turn panel BDD scenarios.

use super::world::PanelWorld;
use rstest_bdd_macros::when;
use turnkeeper::stream::domain::{Message, Part, Role, Source, SourcesPayload};

#[when(r#"the answer streams a status "{message}""#)]
fn streams_status(world: &mut PanelWorld, message: String) {
    world.stream(Part::status(message));
}

#[when(r#"the answer streams sources "{url}""#)]
fn streams_sources(world: &mut PanelWorld, url: String) {
    let payload = SourcesPayload::new([Source::new(url.as_str(), url.as_str())]);
    world.stream(Part::sources(&payload));
}

#[when(r#"the answer streams follow-up questions "{question}""#)]
fn streams_follow_ups(world: &mut PanelWorld, question: String) {
    world.stream(Part::followup([question]));
}

#[when(r#"the answer streams a ticker "{symbol}""#)]
fn streams_ticker(world: &mut PanelWorld, symbol: String) {
    world.stream(Part::ticker(Some(symbol.as_str())));
}

#[when("the answer streams a cleared ticker")]
fn streams_cleared_ticker(world: &mut PanelWorld) {
    world.stream(Part::ticker(None));
}

#[when("the same update is delivered again")]
fn same_update_again(world: &mut PanelWorld) {
    world.deliver();
}

#[when(r#"the user submits "{query}""#)]
fn user_submits(world: &mut PanelWorld, query: String) {
    world.session.prepare_submission();
    world.messages.push(Message::user(query));
    world.deliver();
}

#[when(r#"the user follows up with "{query}" without submitting"#)]
fn user_follows_up_without_submitting(world: &mut PanelWorld, query: String) {
    world.messages.push(Message::user(query));
    world.deliver();
}

#[when("a new answer begins")]
fn new_answer_begins(world: &mut PanelWorld) {
    world.messages.push(Message::new(Role::Assistant));
    world.deliver();
}
