#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use crate::net::types::{EventUsage, PropertyUsage, User};

/// Current user and the usage lists of their active team.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserState {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl UserState {
    /// Event usage rows of the active team; empty when nothing is loaded.
    #[must_use]
    pub fn event_usage(&self) -> &[EventUsage] {
        self.user
            .as_ref()
            .and_then(|u| u.team.as_ref())
            .map(|t| t.event_names_with_usage.as_slice())
            .unwrap_or_default()
    }

    /// Property usage rows of the active team; empty when nothing is loaded.
    #[must_use]
    pub fn property_usage(&self) -> &[PropertyUsage] {
        self.user
            .as_ref()
            .and_then(|u| u.team.as_ref())
            .map(|t| t.event_properties_with_usage.as_slice())
            .unwrap_or_default()
    }

    /// Name of the active team, for the header.
    #[must_use]
    pub fn team_name(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|u| u.team.as_ref())
            .map(|t| t.name.as_str())
    }
}
