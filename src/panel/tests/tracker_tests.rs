//! Unit tests for turn tracking and role anomaly reporting.

use super::fixtures::{assistant, system, user};
use crate::panel::{
    config::SameRolePolicy,
    domain::{RoleAnomaly, TurnIndex},
    services::{
        TurnTracker,
        tracker::{count_turns, starts_turn},
    },
};
use crate::stream::domain::{Message, Role};
use rstest::{fixture, rstest};

#[fixture]
fn tracker() -> TurnTracker {
    TurnTracker::new(SameRolePolicy::MergeConsecutive)
}

fn two_turns() -> Vec<Message> {
    vec![user("q0"), assistant([]), user("q1"), assistant([])]
}

#[rstest]
#[case(None, Role::Assistant, SameRolePolicy::MergeConsecutive, true)]
#[case(Some(Role::User), Role::Assistant, SameRolePolicy::MergeConsecutive, true)]
#[case(Some(Role::Assistant), Role::Assistant, SameRolePolicy::MergeConsecutive, false)]
#[case(Some(Role::Assistant), Role::Assistant, SameRolePolicy::CountEach, true)]
#[case(Some(Role::Assistant), Role::User, SameRolePolicy::CountEach, false)]
#[case(None, Role::User, SameRolePolicy::MergeConsecutive, false)]
fn starts_turn_follows_policy(
    #[case] previous: Option<Role>,
    #[case] role: Role,
    #[case] policy: SameRolePolicy,
    #[case] expected: bool,
) {
    assert_eq!(starts_turn(previous, role, policy), expected);
}

#[test]
fn count_turns_skips_system_messages() {
    let messages = vec![
        system("be concise"),
        user("q0"),
        assistant([]),
        system("reminder"),
        user("q1"),
    ];

    let (turns, anomalies) = count_turns(&messages, SameRolePolicy::MergeConsecutive);

    assert_eq!(turns, 1);
    assert!(anomalies.is_empty());
}

#[rstest]
#[case(SameRolePolicy::MergeConsecutive, 1)]
#[case(SameRolePolicy::CountEach, 2)]
fn consecutive_assistants_counted_per_policy(
    #[case] policy: SameRolePolicy,
    #[case] expected_turns: u64,
) {
    let messages = vec![user("q0"), assistant([]), assistant([])];

    let (turns, anomalies) = count_turns(&messages, policy);

    assert_eq!(turns, expected_turns);
    assert_eq!(
        anomalies,
        vec![RoleAnomaly::ConsecutiveRole {
            role: Role::Assistant,
            position: 2,
        }]
    );
}

#[test]
fn consecutive_users_are_flagged() {
    let messages = vec![user("q0"), user("q0 again"), assistant([])];

    let (turns, anomalies) = count_turns(&messages, SameRolePolicy::MergeConsecutive);

    assert_eq!(turns, 1);
    assert_eq!(
        anomalies,
        vec![RoleAnomaly::ConsecutiveRole {
            role: Role::User,
            position: 1,
        }]
    );
}

#[rstest]
fn no_turn_before_first_assistant(mut tracker: TurnTracker) {
    let update = tracker.observe(&[user("q0")]);

    assert_eq!(update.boundary, None);
    assert_eq!(tracker.current_turn(), None);
}

#[rstest]
fn first_assistant_opens_turn_zero(mut tracker: TurnTracker) {
    let update = tracker.observe(&[user("q0"), assistant([])]);

    let boundary = update.boundary.expect("first turn begins");
    assert_eq!(boundary.previous, None);
    assert_eq!(boundary.current, TurnIndex::new(0));
    assert_eq!(tracker.current_turn(), Some(TurnIndex::new(0)));
}

#[rstest]
fn unchanged_count_reports_no_boundary(mut tracker: TurnTracker) {
    let messages = vec![user("q0"), assistant([])];
    tracker.observe(&messages);

    let update = tracker.observe(&messages);

    assert_eq!(update.boundary, None);
    assert!(update.anomalies.is_empty());
}

#[rstest]
fn second_assistant_advances_turn(mut tracker: TurnTracker) {
    let mut messages = two_turns();
    messages.pop();
    tracker.observe(&messages);

    let update = tracker.observe(&two_turns());

    let boundary = update.boundary.expect("second turn begins");
    assert_eq!(boundary.previous, Some(TurnIndex::new(0)));
    assert_eq!(boundary.current, TurnIndex::new(1));
}

#[rstest]
fn jump_of_several_turns_lands_on_latest(mut tracker: TurnTracker) {
    let update = tracker.observe(&two_turns());

    let boundary = update.boundary.expect("turns begin");
    assert_eq!(boundary.previous, None);
    assert_eq!(boundary.current, TurnIndex::new(1));
}

#[rstest]
fn regression_is_reported_and_ignored(mut tracker: TurnTracker) {
    tracker.observe(&two_turns());

    let update = tracker.observe(&[user("q0"), assistant([])]);

    assert_eq!(update.boundary, None);
    assert_eq!(
        update.anomalies,
        vec![RoleAnomaly::Regressed {
            previous: 2,
            observed: 1,
        }]
    );
    assert_eq!(tracker.current_turn(), Some(TurnIndex::new(1)));
}

#[rstest]
fn anomalies_are_reported_once(mut tracker: TurnTracker) {
    let messages = vec![user("q0"), assistant([]), assistant([])];

    let first = tracker.observe(&messages);
    let second = tracker.observe(&messages);

    assert_eq!(first.anomalies.len(), 1);
    assert!(second.anomalies.is_empty());
}
