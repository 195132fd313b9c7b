pub mod api;
pub mod ban;
pub mod query;
