//! Tests for recording parsing and replay.

use super::{Cli, ReplayError, ReplayLine, parse_line, replay};
use rstest::rstest;
use turnkeeper::panel::{
    config::{ChangeDetection, SameRolePolicy, SessionConfig},
    domain::{FreezeCause, RoleAnomaly, Snapshot, TurnIndex, TurnPhase},
};

const TURN_ZERO: &str = r#"[{"role":"user","parts":[{"type":"text","text":"q0"}]},{"role":"assistant","parts":[{"type":"data-ticker","data":{"symbol":"AAPL"}}]}]"#;
const TURN_ONE: &str = r#"[{"role":"user","parts":[{"type":"text","text":"q0"}]},{"role":"assistant","parts":[{"type":"data-ticker","data":{"symbol":"AAPL"}}]},{"role":"user","parts":[{"type":"text","text":"q1"}]},{"role":"assistant","parts":[{"type":"data-status","data":{"message":"Searching web..."}}]}]"#;

fn recording(lines: &[&str]) -> String {
    lines.join("\n")
}

#[rstest]
#[case("")]
#[case("   ")]
#[case(r#"{"submit": false}"#)]
#[case("{}")]
fn blank_and_inert_lines_are_ignored(#[case] line: &str) {
    assert!(matches!(parse_line(line), Ok(ReplayLine::Ignored)));
}

#[test]
fn submit_marker_is_recognised() {
    assert!(matches!(
        parse_line(r#"{"submit": true}"#),
        Ok(ReplayLine::Submit)
    ));
}

#[test]
fn message_list_is_an_update() {
    let parsed = parse_line(TURN_ZERO);
    assert!(matches!(parsed, Ok(ReplayLine::Update(messages)) if messages.len() == 2));
}

#[test]
fn submission_marker_freezes_turn_before_next_query() -> Result<(), ReplayError> {
    let input = recording(&[TURN_ZERO, r#"{"submit": true}"#, TURN_ONE]);

    let report = replay(&input, SessionConfig::default())?;

    assert_eq!(report.updates, 2);
    assert_eq!(report.current_turn, Some(TurnIndex::new(1)));
    assert_eq!(report.phase, TurnPhase::Accumulating);
    assert_eq!(report.live.status(), "Searching web...");
    assert_eq!(report.history.len(), 1);
    let frozen = report.history.first().map(|snapshot| {
        (
            snapshot.turn(),
            snapshot.cause(),
            snapshot.panel().ticker.clone(),
        )
    });
    assert_eq!(
        frozen,
        Some((
            TurnIndex::new(0),
            FreezeCause::Resubmission,
            Some("AAPL".to_owned())
        ))
    );
    Ok(())
}

#[test]
fn boundary_flag_freezes_without_marker() -> Result<(), ReplayError> {
    let input = recording(&[TURN_ZERO, TURN_ONE]);

    let report = replay(&input, SessionConfig::auto_freezing())?;

    assert_eq!(
        report.history.first().map(Snapshot::cause),
        Some(FreezeCause::Boundary)
    );
    Ok(())
}

#[test]
fn anomalies_are_collected() -> Result<(), ReplayError> {
    let input = recording(&[TURN_ONE, TURN_ZERO]);

    let report = replay(&input, SessionConfig::default())?;

    assert_eq!(
        report.anomalies,
        vec![RoleAnomaly::Regressed {
            previous: 2,
            observed: 1,
        }]
    );
    Ok(())
}

#[test]
fn decode_failure_names_the_line() {
    let input = recording(&[TURN_ZERO, "", r#"[{"role":"narrator"}]"#]);

    let result = replay(&input, SessionConfig::default());

    assert!(matches!(result, Err(ReplayError::Decode { line: 3, .. })));
}

#[test]
fn flags_map_onto_session_config() {
    let cli = Cli {
        input: "updates.jsonl".into(),
        fingerprint: true,
        count_each_assistant: true,
        freeze_on_boundary: true,
    };

    let config = cli.config();

    assert_eq!(config.change_detection, ChangeDetection::Fingerprint);
    assert_eq!(config.same_role_policy, SameRolePolicy::CountEach);
    assert!(config.freeze_on_boundary);
}
