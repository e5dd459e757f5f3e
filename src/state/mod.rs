//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`user`, `actions`, `ui`, `project_dialog`) so
//! components depend on small focused models. Each is a plain struct held in
//! an `RwSignal` context; views derive from snapshots and mutate only through
//! the methods defined here.

pub mod actions;
pub mod project_dialog;
pub mod ui;
pub mod user;
