//! Given steps for turn panel BDD scenarios.

use super::world::PanelWorld;
use rstest_bdd_macros::given;
use turnkeeper::{panel::config::SessionConfig, stream::domain::Message};

#[given("a panel session")]
fn panel_session(world: &mut PanelWorld) {
    *world = PanelWorld::default();
}

#[given("an auto-freezing panel session")]
fn auto_freezing_panel_session(world: &mut PanelWorld) {
    *world = PanelWorld::with_config(SessionConfig::auto_freezing());
}

#[given(r#"the user asks "{query}""#)]
fn user_asks(world: &mut PanelWorld, query: String) {
    world.messages.push(Message::user(query));
    world.deliver();
}
