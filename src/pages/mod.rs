//! Routed pages.

pub mod manage_events;
