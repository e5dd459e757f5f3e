//! Pure helpers shared by the views: collation, table sorting and paging,
//! and the built-in property registry.

pub mod collate;
pub mod property_registry;
pub mod usage_table;
