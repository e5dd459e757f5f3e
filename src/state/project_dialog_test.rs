use super::*;

// =============================================================
// Helpers
// =============================================================

fn open_with(name: &str) -> ProjectDialogState {
    let mut s = ProjectDialogState::default();
    s.open();
    s.set_name(name);
    s
}

/// Drive `confirm` and record every name handed to the create action.
fn confirm_recording(state: &mut ProjectDialogState, created: &mut Vec<String>) {
    if let Some(name) = state.confirm() {
        created.push(name);
    }
}

// =============================================================
// Defaults / open
// =============================================================

#[test]
fn dialog_starts_closed() {
    let s = ProjectDialogState::default();
    assert!(!s.visible);
    assert!(s.name.is_empty());
    assert!(s.error_message.is_none());
}

#[test]
fn open_starts_blank() {
    let mut s = ProjectDialogState {
        visible: false,
        name: "leftover".to_owned(),
        error_message: Some("old".to_owned()),
    };
    s.open();
    assert!(s.visible);
    assert!(s.name.is_empty());
    assert!(s.error_message.is_none());
}

// =============================================================
// Confirm
// =============================================================

#[test]
fn confirm_empty_name_stays_open_with_error() {
    for input in ["", "   "] {
        let mut s = open_with(input);
        let mut created = Vec::new();
        confirm_recording(&mut s, &mut created);
        assert!(s.visible);
        assert_eq!(s.error_message.as_deref(), Some(EMPTY_NAME_MESSAGE));
        assert!(created.is_empty());
    }
}

#[test]
fn confirm_trims_and_closes() {
    let mut s = open_with("  My Project  ");
    let mut created = Vec::new();
    confirm_recording(&mut s, &mut created);
    assert_eq!(created, vec!["My Project".to_owned()]);
    assert!(!s.visible);
    assert!(s.error_message.is_none());
    assert!(s.name.is_empty());
}

#[test]
fn retry_after_validation_error_succeeds_once() {
    let mut s = open_with(" ");
    let mut created = Vec::new();
    confirm_recording(&mut s, &mut created);
    s.set_name("Website");
    confirm_recording(&mut s, &mut created);
    confirm_recording(&mut s, &mut created);
    assert_eq!(created, vec!["Website".to_owned()]);
    assert!(s.error_message.is_none());
}

#[test]
fn confirm_while_closed_does_nothing() {
    let mut s = ProjectDialogState::default();
    s.set_name("Ghost");
    assert_eq!(s.confirm(), None);
    assert!(!s.visible);
    assert!(s.error_message.is_none());
}

// =============================================================
// Cancel
// =============================================================

#[test]
fn cancel_clears_everything() {
    let mut s = open_with("");
    let mut created = Vec::new();
    confirm_recording(&mut s, &mut created);
    s.set_name("half typed");
    s.cancel();
    assert!(!s.visible);
    assert!(s.name.is_empty());
    assert!(s.error_message.is_none());
    assert!(created.is_empty());
}

#[test]
fn cancel_when_closed_is_harmless() {
    let mut s = ProjectDialogState::default();
    s.cancel();
    assert_eq!(s, ProjectDialogState::default());
}

// =============================================================
// Input
// =============================================================

#[test]
fn set_name_truncates_to_max_length() {
    let mut s = open_with(&"x".repeat(PROJECT_NAME_MAX_LEN + 10));
    assert_eq!(s.name.chars().count(), PROJECT_NAME_MAX_LEN);
    s.set_name("é".repeat(70).as_str());
    assert_eq!(s.name.chars().count(), PROJECT_NAME_MAX_LEN);
}
