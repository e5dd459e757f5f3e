//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the Manage Events panes and the project dialog while
//! reading/writing shared state from Leptos context providers.

pub mod actions_table;
pub mod create_project_modal;
pub mod event_usage_table;
pub mod property_usage_table;
pub mod usage_table;
