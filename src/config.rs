//! Compile-time configuration: REST endpoints and UI limits.
//!
//! There is no runtime configuration in this crate. The `csr` Cargo
//! feature selects the browser runtime; everything else is a constant here.

/// Current user, including the active team and its usage lists.
pub const USER_ENDPOINT: &str = "/api/user";

/// Actions ("synthetic events") of the active team.
pub const ACTIONS_ENDPOINT: &str = "/api/action/";

/// Project (team) creation.
pub const PROJECTS_ENDPOINT: &str = "/api/projects/";

/// Rows per page in usage tables. Large enough that the pager never shows
/// for realistic lists.
pub const USAGE_PAGE_SIZE: usize = 99_999;

/// Maximum accepted project name length, in characters.
pub const PROJECT_NAME_MAX_LEN: usize = 64;
