//! Route path constants shared by the router, the views, and tests.

/// Transfer page: the transfer form plus the live account balances table.
pub const TRANSFER_VIEW: &str = "/";

/// Transfer submission (POST).
pub const TRANSFER: &str = "/transfer";

/// Audit trail page.
pub const AUDIT_LOG_VIEW: &str = "/audit-log";

/// Schema change log page.
pub const SCHEMA_LOG_VIEW: &str = "/schema-log";

/// JSON health check endpoint.
pub const HEALTH: &str = "/health";
