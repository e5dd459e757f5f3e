//! Wire DTOs for the REST payloads this slice consumes.
//!
//! DESIGN
//! ======
//! Field names follow the server's JSON (`snake_case`) so serde needs no
//! renames. Usage lists default to empty when the server omits them, which
//! lets the tables degrade to an empty render instead of a decode failure.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// 30-day usage statistics for one event name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventUsage {
    /// Event name, unique within a team's list.
    pub event: String,
    /// Queries that referenced this event in the last 30 days.
    #[serde(default)]
    pub usage_count: u64,
    /// Occurrences of this event in the last 30 days.
    #[serde(default)]
    pub volume: u64,
}

/// 30-day usage statistics for one event property key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyUsage {
    /// Property key, unique within a team's list.
    pub key: String,
    /// Queries that filtered on this property in the last 30 days.
    #[serde(default)]
    pub usage_count: u64,
    /// Events carrying this property in the last 30 days.
    #[serde(default)]
    pub volume: u64,
}

/// The active team (project) of the current user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub event_names_with_usage: Vec<EventUsage>,
    #[serde(default)]
    pub event_properties_with_usage: Vec<PropertyUsage>,
}

/// Short team reference used by the project switcher list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub id: i64,
    pub name: String,
}

/// Authenticated user as returned by `/api/user`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub distinct_id: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
    pub team: Option<Team>,
    #[serde(default)]
    pub teams: Vec<TeamSummary>,
}

/// A synthetic event (action) definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub id: i64,
    pub name: String,
    /// Matching events in the last 30 days, when the server computed it.
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Paginated list envelope used by the actions endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ActionList {
    #[serde(default)]
    pub results: Vec<Action>,
}

/// Request body for project creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateProjectRequest {
    pub name: String,
}
