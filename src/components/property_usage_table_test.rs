use super::*;

#[test]
fn toggle_label_offers_the_opposite_action() {
    assert_eq!(toggle_label(true), "Hide PostHog properties");
    assert_eq!(toggle_label(false), "Show PostHog properties");
}
