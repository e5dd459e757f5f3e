use super::*;
use crate::net::types::Team;

fn user_with_team() -> User {
    User {
        id: 1,
        distinct_id: "d-1".to_owned(),
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        team: Some(Team {
            id: 3,
            name: "Website".to_owned(),
            event_names_with_usage: vec![EventUsage {
                event: "$pageview".to_owned(),
                usage_count: 2,
                volume: 40,
            }],
            event_properties_with_usage: vec![PropertyUsage {
                key: "$browser".to_owned(),
                usage_count: 1,
                volume: 40,
            }],
        }),
        teams: Vec::new(),
    }
}

#[test]
fn user_state_defaults() {
    let s = UserState::default();
    assert!(s.user.is_none());
    assert!(!s.loading);
    assert!(s.error.is_none());
}

#[test]
fn usage_lists_are_empty_without_user() {
    let s = UserState::default();
    assert!(s.event_usage().is_empty());
    assert!(s.property_usage().is_empty());
    assert_eq!(s.team_name(), None);
}

#[test]
fn usage_lists_are_empty_without_team() {
    let mut user = user_with_team();
    user.team = None;
    let s = UserState { user: Some(user), ..UserState::default() };
    assert!(s.event_usage().is_empty());
    assert!(s.property_usage().is_empty());
}

#[test]
fn usage_lists_come_from_active_team() {
    let s = UserState { user: Some(user_with_team()), ..UserState::default() };
    assert_eq!(s.event_usage().len(), 1);
    assert_eq!(s.property_usage()[0].key, "$browser");
    assert_eq!(s.team_name(), Some("Website"));
}
