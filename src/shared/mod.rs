pub mod api;
pub mod audience;
pub mod casing;
pub mod config;
pub mod list_ids;
