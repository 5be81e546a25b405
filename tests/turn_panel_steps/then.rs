//! Then steps for turn panel BDD scenarios.

use super::world::PanelWorld;
use rstest_bdd_macros::then;
use turnkeeper::panel::domain::TurnIndex;

#[then(r#"the live status is "{status}""#)]
fn live_status_is(world: &PanelWorld, status: String) -> Result<(), eyre::Report> {
    let actual = world.session.live().status();
    if actual != status {
        return Err(eyre::eyre!("expected status {status:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("the live panel has {count:u64} sources")]
fn live_panel_has_sources(world: &PanelWorld, count: u64) -> Result<(), eyre::Report> {
    let actual = world.session.live().panel().sources.len();
    if u64::try_from(actual)? != count {
        return Err(eyre::eyre!("expected {count} sources, found {actual}"));
    }
    Ok(())
}

#[then("the live panel has {count:u64} follow-up questions")]
fn live_panel_has_follow_ups(world: &PanelWorld, count: u64) -> Result<(), eyre::Report> {
    let actual = world.session.live().panel().follow_up_questions.len();
    if u64::try_from(actual)? != count {
        return Err(eyre::eyre!("expected {count} follow-up questions, found {actual}"));
    }
    Ok(())
}

#[then(r#"the live ticker is "{symbol}""#)]
fn live_ticker_is(world: &PanelWorld, symbol: String) -> Result<(), eyre::Report> {
    let actual = world.session.live().panel().ticker.as_deref();
    if actual != Some(symbol.as_str()) {
        return Err(eyre::eyre!("expected ticker {symbol}, found {actual:?}"));
    }
    Ok(())
}

#[then("the live ticker is cleared")]
fn live_ticker_is_cleared(world: &PanelWorld) -> Result<(), eyre::Report> {
    if let Some(symbol) = world.session.live().panel().ticker.as_deref() {
        return Err(eyre::eyre!("expected no ticker, found {symbol}"));
    }
    Ok(())
}

#[then("the live panel is empty")]
fn live_panel_is_empty(world: &PanelWorld) -> Result<(), eyre::Report> {
    if world.session.live().has_data() {
        return Err(eyre::eyre!(
            "expected an empty live panel, found {:?}",
            world.session.live().panel()
        ));
    }
    Ok(())
}

#[then("the current turn is {turn:u64}")]
fn current_turn_is(world: &PanelWorld, turn: u64) -> Result<(), eyre::Report> {
    let actual = world.session.current_turn();
    if actual != Some(TurnIndex::new(turn)) {
        return Err(eyre::eyre!("expected turn {turn}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"turn {turn:u64} is frozen with ticker "{symbol}""#)]
fn turn_is_frozen_with_ticker(
    world: &PanelWorld,
    turn: u64,
    symbol: String,
) -> Result<(), eyre::Report> {
    let snapshot = world
        .session
        .snapshot(TurnIndex::new(turn))
        .ok_or_else(|| eyre::eyre!("missing snapshot for turn {turn}"))?;
    let frozen = snapshot.panel().ticker.as_deref();
    if frozen != Some(symbol.as_str()) {
        return Err(eyre::eyre!("expected frozen ticker {symbol}, found {frozen:?}"));
    }
    Ok(())
}

#[then("turn {turn:u64} has no snapshot")]
fn turn_has_no_snapshot(world: &PanelWorld, turn: u64) -> Result<(), eyre::Report> {
    if let Some(snapshot) = world.session.snapshot(TurnIndex::new(turn)) {
        return Err(eyre::eyre!("unexpected snapshot {snapshot:?}"));
    }
    Ok(())
}

#[then("the update was skipped")]
fn update_was_skipped(world: &PanelWorld) -> Result<(), eyre::Report> {
    let outcome = world
        .last_outcome
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no update delivered"))?;
    if outcome.processed {
        return Err(eyre::eyre!("expected the update to be skipped, got {outcome:?}"));
    }
    Ok(())
}
