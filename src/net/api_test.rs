use super::*;
#[cfg(not(feature = "csr"))]
use futures::executor::block_on;

fn action(id: i64, name: &str) -> Action {
    Action { id, name: name.to_owned(), count: None, created_at: None }
}

#[test]
fn api_error_messages_are_readable() {
    assert_eq!(ApiError::Status(404).to_string(), "server responded with status 404");
    assert_eq!(ApiError::Request("offline".to_owned()).to_string(), "request failed: offline");
    assert_eq!(ApiError::Decode("eof".to_owned()).to_string(), "malformed response: eof");
    assert_eq!(ApiError::Unavailable.to_string(), "not available outside the browser");
}

#[test]
fn sort_actions_orders_by_name_case_insensitively() {
    let sorted = sort_actions(vec![action(1, "zebra"), action(2, "Apple"), action(3, "banana")]);
    let names: Vec<_> = sorted.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Apple", "banana", "zebra"]);
}

#[test]
fn sort_actions_empty_is_empty() {
    assert!(sort_actions(Vec::new()).is_empty());
}

#[cfg(not(feature = "csr"))]
#[test]
fn helpers_are_unavailable_outside_browser() {
    assert_eq!(block_on(create_project("x")), Err(ApiError::Unavailable));
    assert_eq!(block_on(fetch_current_user()), Err(ApiError::Unavailable));
    assert_eq!(block_on(fetch_actions()), Err(ApiError::Unavailable));
}

#[test]
fn check_status_accepts_only_2xx() {
    assert_eq!(check_status(200), Ok(()));
    assert_eq!(check_status(201), Ok(()));
    assert_eq!(check_status(302), Err(ApiError::Status(302)));
    assert_eq!(check_status(500), Err(ApiError::Status(500)));
}
