//! Data models mapping to database tables.

/// Customer account row
pub mod account;
/// Balance audit trail row
pub mod audit;
/// Schema change event row
pub mod schema_change;
